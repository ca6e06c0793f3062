//! realmgrid Domain - characters and everything they carry, befriend or ride.
//!
//! ## Structure
//!
//! - `aggregates/` - The `Character` aggregate
//! - `entities/` - Items, missions, pets and weapons
//! - `events/` - Outcome enums returned by mutations
//! - `value_objects/` - Names, races, positions, attacks and damage
//! - `ids` - Typed identifiers
//!
//! The crate neither logs nor rolls dice; time and randomness are passed in.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod events;
pub mod ids;
pub mod value_objects;

pub use aggregates::{Character, Encounter};
pub use entities::{
    CompletedMission, Item, Mission, Pet, Weapon, WeaponKind, FULL_ENERGY, STARTING_AMMO,
};
pub use error::DomainError;
pub use events::{
    AdoptOutcome, CoinTransfer, EncounterOutcome, FeedOutcome, FireOutcome, FriendshipOutcome,
    MissionOutcome, ReleaseOutcome,
};

// Re-export ID types
pub use ids::{CharacterId, ElementId, ItemId, MissionId, PetId};

// Re-export value objects
pub use value_objects::{
    describe_races, Allegiance, Attack, CharacterName, Damage, ItemName, PetName, Position, Race,
    WeaponName, MAX_DAMAGE,
};
