//! Domain Events
//!
//! Return types from aggregate and entity mutations, communicating what
//! happened when state was modified.

pub mod character_events;

pub use character_events::*;
