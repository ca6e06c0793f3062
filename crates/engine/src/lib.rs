//! realmgrid Engine library.
//!
//! ## Structure
//!
//! - `map/` - The map (`SpatialRegistry`) and the `Placeable` capability
//! - `entities/` - `Placeable` behaviour for domain characters and pets
//! - `use_cases/` - Character actions that need the clock or the dice
//! - `infrastructure/` - Ports, their system implementations, config and logging
//! - `app` - Application composition

pub mod app;
pub mod entities;
pub mod infrastructure;
pub mod map;
pub mod use_cases;

/// Scenario tests driving the map with real characters and pets.
#[cfg(test)]
mod e2e_tests;

pub use app::App;
