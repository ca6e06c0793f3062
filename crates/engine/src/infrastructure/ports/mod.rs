//! Port traits for infrastructure boundaries.
//!
//! Ports exist so use cases can be tested with a fixed clock and fixed dice.

mod testing;

pub use testing::{ClockPort, RandomPort};

#[cfg(test)]
pub use testing::{MockClockPort, MockRandomPort};
