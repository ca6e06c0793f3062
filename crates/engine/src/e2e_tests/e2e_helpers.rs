//! Shared fixtures for scenario tests.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use realmgrid_domain::{Character, CharacterName, Pet, PetName, Position, Race};

use crate::infrastructure::clock::{FixedClock, SystemRandom};
use crate::infrastructure::config::EngineConfig;
use crate::App;

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap()
}

pub fn character_at(name: &str, race: Race, x: i32, y: i32) -> Character {
    Character::new(CharacterName::new(name).unwrap(), race).with_position(Position::new(x, y))
}

pub fn pet_at(name: &str, x: i32, y: i32) -> Pet {
    Pet::new(PetName::new(name).unwrap()).with_position(Position::new(x, y))
}

/// An app with a frozen clock and seeded dice.
pub fn test_app(config: EngineConfig) -> App {
    App::with_ports(
        config,
        Arc::new(FixedClock(fixed_now())),
        Arc::new(SystemRandom::seeded(1234)),
    )
}
