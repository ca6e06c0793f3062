//! Mission use cases.

use std::sync::Arc;

use realmgrid_domain::{Character, Mission, MissionOutcome};

use crate::infrastructure::ports::ClockPort;

/// Have a character carry out a mission, stamped with the current time.
pub struct PerformMission {
    clock: Arc<dyn ClockPort>,
}

impl PerformMission {
    pub fn new(clock: Arc<dyn ClockPort>) -> Self {
        Self { clock }
    }

    pub fn execute(&self, character: &mut Character, mission: &Mission) -> MissionOutcome {
        let outcome = character.perform_mission(mission, self.clock.now());
        match &outcome {
            MissionOutcome::Completed { reward, .. } => tracing::info!(
                character = %character.name(),
                mission = %mission,
                reward,
                "Mission completed"
            ),
            MissionOutcome::AlreadyCompleted { .. } => tracing::debug!(
                character = %character.name(),
                mission = %mission,
                "Mission already completed, nothing to pay"
            ),
        }
        outcome
    }
}
