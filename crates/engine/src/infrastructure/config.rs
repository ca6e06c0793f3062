//! Engine configuration from the environment.
//!
//! Values come from process environment variables, optionally seeded from a
//! `.env` file by the binary before [`EngineConfig::from_env`] runs.

use thiserror::Error;

use crate::map::OccupancyPolicy;

pub const OCCUPANCY_POLICY_VAR: &str = "REALMGRID_OCCUPANCY_POLICY";
pub const RNG_SEED_VAR: &str = "REALMGRID_RNG_SEED";
pub const LOG_FILTER_VAR: &str = "REALMGRID_LOG";

const DEFAULT_LOG_FILTER: &str = "realmgrid_engine=debug";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub occupancy_policy: OccupancyPolicy,
    /// Fixed seed for weapon rolls; `None` uses the thread RNG
    pub rng_seed: Option<u64>,
    /// Log filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            occupancy_policy: OccupancyPolicy::default(),
            rng_seed: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let occupancy_policy = match non_empty(lookup(OCCUPANCY_POLICY_VAR)) {
            Some(value) => value.parse::<OccupancyPolicy>().map_err(|_| ConfigError::InvalidValue {
                key: OCCUPANCY_POLICY_VAR,
                value,
            })?,
            None => defaults.occupancy_policy,
        };

        let rng_seed = match non_empty(lookup(RNG_SEED_VAR)) {
            Some(value) => Some(value.trim().parse::<u64>().map_err(|_| {
                ConfigError::InvalidValue {
                    key: RNG_SEED_VAR,
                    value,
                }
            })?),
            None => defaults.rng_seed,
        };

        let log_filter = non_empty(lookup(LOG_FILTER_VAR)).unwrap_or(defaults.log_filter);

        Ok(Self {
            occupancy_policy,
            rng_seed,
            log_filter,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
