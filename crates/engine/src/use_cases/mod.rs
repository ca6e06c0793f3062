//! Use cases - character actions that need time or randomness.
//!
//! The domain types stay deterministic; use cases inject the clock and the
//! dice through ports.

pub mod armory;
pub mod missions;

pub use armory::{CraftWeapon, CraftWeaponError};
pub use missions::PerformMission;
