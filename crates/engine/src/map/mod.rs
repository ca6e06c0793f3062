//! The 2D map and the capability its elements expose.

mod error;
mod placeable;
mod policy;
mod registry;

pub use error::MapError;
pub use placeable::{Occupant, Placeable};
pub use policy::OccupancyPolicy;
pub use registry::{MoveOutcome, SpatialRegistry};

#[cfg(test)]
pub use placeable::MockPlaceable;
