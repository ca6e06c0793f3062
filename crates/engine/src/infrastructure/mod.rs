//! Infrastructure implementations.
//!
//! Contains port trait implementations, configuration and logging bootstrap.

pub mod clock;
pub mod config;
pub mod logging;
pub mod ports;
