//! Pet entity - a companion that exists independently of its owner
//!
//! Ownership is bidirectional: the owner records the pet's id and the pet
//! records the owner's id. [`crate::aggregates::Character::adopt_pet`] sets
//! both sides in one call.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::events::FeedOutcome;
use crate::value_objects::Position;
use crate::{CharacterId, PetId, PetName};

/// Energy of a freshly fed pet
pub const FULL_ENERGY: u8 = 100;

/// A pet
///
/// # Invariants
///
/// - `energy` is always within `0..=FULL_ENERGY`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    id: PetId,
    name: PetName,
    energy: u8,
    owner: Option<CharacterId>,
    position: Position,
}

impl Pet {
    pub fn new(name: PetName) -> Self {
        Self {
            id: PetId::new(),
            name,
            energy: FULL_ENERGY,
            owner: None,
            position: Position::ORIGIN,
        }
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Set the starting energy, clamped to `FULL_ENERGY`.
    pub fn with_energy(mut self, energy: u8) -> Self {
        self.energy = energy.min(FULL_ENERGY);
        self
    }

    pub fn id(&self) -> PetId {
        self.id
    }

    pub fn name(&self) -> &PetName {
        &self.name
    }

    pub fn energy(&self) -> u8 {
        self.energy
    }

    pub fn owner(&self) -> Option<CharacterId> {
        self.owner
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn has_energy(&self) -> bool {
        self.energy > 0
    }

    /// Relocate the pet. No bounds apply.
    pub fn move_to(&mut self, position: Position) {
        self.position = position;
    }

    /// Spend energy, never going below zero. Returns the remaining energy.
    pub fn tire(&mut self, amount: u8) -> u8 {
        self.energy = self.energy.saturating_sub(amount);
        self.energy
    }

    /// Restore the pet to full energy if it has run out.
    pub fn feed(&mut self) -> FeedOutcome {
        if self.has_energy() {
            return FeedOutcome::NotHungry;
        }
        self.energy = FULL_ENERGY;
        FeedOutcome::Fed {
            energy: self.energy,
        }
    }

    // Only the owner side of the link calls this, see `Character::adopt_pet`.
    pub(crate) fn set_owner(&mut self, owner: CharacterId) {
        self.owner = Some(owner);
    }

    pub(crate) fn clear_owner(&mut self) {
        self.owner = None;
    }
}

impl fmt::Display for Pet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pet {} (energy {})", self.name, self.energy)
    }
}
