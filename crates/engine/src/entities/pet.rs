//! Pets on the map.

use realmgrid_domain::{ElementId, Pet, Position};

use crate::map::{Occupant, Placeable};

/// Energy a pet spends whenever it runs into another element
pub const ENERGY_PER_ENCOUNTER: u8 = 10;

impl Placeable for Pet {
    fn id(&self) -> ElementId {
        Pet::id(self).into()
    }

    fn kind(&self) -> &'static str {
        "Pet"
    }

    fn label(&self) -> String {
        self.to_string()
    }

    fn position(&self) -> Position {
        Pet::position(self)
    }

    fn move_to(&mut self, position: Position) {
        Pet::move_to(self, position)
    }

    fn interact(&mut self, occupant: &Occupant) {
        let energy = self.tire(ENERGY_PER_ENCOUNTER);
        tracing::info!(
            pet = %self.name(),
            other = %occupant.label,
            energy,
            "Pet plays with a neighbour"
        );
        if energy == 0 {
            tracing::debug!(pet = %self.name(), "Pet is exhausted and needs feeding");
        }
    }

    fn draw(&self) {
        tracing::info!(
            pet = %self.name(),
            position = %Pet::position(self),
            "Drawing pet"
        );
    }
}
