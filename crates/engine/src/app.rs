//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    clock::{SystemClock, SystemRandom},
    config::EngineConfig,
    ports::{ClockPort, RandomPort},
};
use crate::map::{Placeable, SpatialRegistry};
use crate::use_cases::{CraftWeapon, PerformMission};

/// Main application state.
///
/// Holds the configuration and the use cases built from it.
pub struct App {
    pub config: EngineConfig,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub craft_weapon: CraftWeapon,
    pub perform_mission: PerformMission,
}

impl App {
    /// Wire the application with the system clock and RNG.
    pub fn new(config: EngineConfig) -> Self {
        let clock: Arc<dyn ClockPort> = Arc::new(SystemClock::new());
        let random: Arc<dyn RandomPort> = Arc::new(SystemRandom::from_seed(config.rng_seed));
        Self::with_ports(config, clock, random)
    }

    pub fn with_ports(
        config: EngineConfig,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        let use_cases = UseCases {
            craft_weapon: CraftWeapon::new(random),
            perform_mission: PerformMission::new(clock),
        };
        Self { config, use_cases }
    }

    /// An empty map using the configured occupancy policy.
    pub fn new_map<P: Placeable>(&self) -> SpatialRegistry<P> {
        SpatialRegistry::with_policy(self.config.occupancy_policy)
    }
}
