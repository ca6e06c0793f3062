//! Characters on the map.

use realmgrid_domain::{Character, ElementId, EncounterOutcome, Position};

use crate::map::{Occupant, Placeable};

impl Placeable for Character {
    fn id(&self) -> ElementId {
        Character::id(self).into()
    }

    fn kind(&self) -> &'static str {
        "Character"
    }

    fn label(&self) -> String {
        self.to_string()
    }

    fn position(&self) -> Position {
        Character::position(self)
    }

    fn move_to(&mut self, position: Position) {
        Character::move_to(self, position)
    }

    fn interact(&mut self, occupant: &Occupant) {
        match self.record_encounter(occupant.id) {
            EncounterOutcome::FirstMeeting { .. } => tracing::info!(
                character = %self.name(),
                other = %occupant.label,
                other_kind = occupant.kind,
                "Meeting for the first time"
            ),
            EncounterOutcome::MetAgain { times, .. } => tracing::info!(
                character = %self.name(),
                other = %occupant.label,
                times,
                "Meeting again"
            ),
        }
    }

    fn draw(&self) {
        tracing::info!(
            character = %self.name(),
            race = %self.race(),
            position = %Character::position(self),
            "Drawing character"
        );
    }
}
