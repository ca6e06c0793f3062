//! Aggregates - consistency boundaries that own their relationships

mod character;

pub use character::{Character, Encounter};
