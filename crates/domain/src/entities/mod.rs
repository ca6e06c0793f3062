//! Entities - objects with identity that live alongside characters

mod item;
mod mission;
mod pet;
mod weapon;

pub use item::Item;
pub use mission::{CompletedMission, Mission};
pub use pet::{Pet, FULL_ENERGY};
pub use weapon::{Weapon, WeaponKind, STARTING_AMMO};
