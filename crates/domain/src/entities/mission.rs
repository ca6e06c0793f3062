//! Mission entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::MissionId;

/// A task a character can carry out. The character only uses the mission;
/// it never owns it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    pub id: MissionId,
    pub title: String,
    /// Coins paid on first completion
    pub reward: u32,
}

impl Mission {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: MissionId::new(),
            title: title.into(),
            reward: 0,
        }
    }

    pub fn with_reward(mut self, reward: u32) -> Self {
        self.reward = reward;
        self
    }
}

impl fmt::Display for Mission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Record of a mission a character completed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedMission {
    pub mission_id: MissionId,
    pub title: String,
    pub completed_at: DateTime<Utc>,
}
