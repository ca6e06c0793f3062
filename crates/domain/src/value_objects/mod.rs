//! Value objects - Immutable objects defined by their attributes

mod combat;
mod names;
mod position;
mod race;

pub use combat::{Attack, Damage, MAX_DAMAGE};
pub use names::{CharacterName, ItemName, PetName, WeaponName};
pub use position::Position;
pub use race::{describe_races, Allegiance, Race};
