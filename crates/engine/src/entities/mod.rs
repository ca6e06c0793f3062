//! Entity modules - domain types placed on the map.
//!
//! Each module gives a domain type its `Placeable` behaviour: how it is
//! drawn, how it moves and what it does when it meets another element.

pub mod character;
pub mod pet;

pub use pet::ENERGY_PER_ENCOUNTER;
