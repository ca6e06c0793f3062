//! Occupancy policy for moves

use serde::{Deserialize, Serialize};

/// Whether the element being moved may match itself when the map looks for
/// an occupant at its destination.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OccupancyPolicy {
    /// Skip the mover; only other elements count as occupants.
    #[default]
    ExcludeMover,
    /// Plain first-match scan. A mover already standing on its destination
    /// is reported as its own occupant and interacts with itself.
    IncludeMover,
}

impl std::fmt::Display for OccupancyPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OccupancyPolicy::ExcludeMover => write!(f, "exclude_mover"),
            OccupancyPolicy::IncludeMover => write!(f, "include_mover"),
        }
    }
}

impl std::str::FromStr for OccupancyPolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exclude_mover" | "excludemover" | "exclude" => Ok(OccupancyPolicy::ExcludeMover),
            "include_mover" | "includemover" | "include" => Ok(OccupancyPolicy::IncludeMover),
            _ => Err(()),
        }
    }
}
