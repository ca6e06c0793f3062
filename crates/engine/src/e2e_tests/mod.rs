//! Scenario tests.
//!
//! These drive the map with real domain characters and pets, and the use
//! cases through a fully wired `App` with fixed ports.
//!
//! ```bash
//! cargo test -p realmgrid-engine --lib e2e_tests
//! ```

mod e2e_helpers;
mod map_scenario_tests;
