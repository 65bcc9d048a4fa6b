//! Typed adapter for the Telldus `tdtool` command-line utility
//!
//! This crate drives `tdtool` as a subprocess to control radio-frequency
//! switches and dimmers and to read sensors, turning its plain-text output
//! into typed records.
//!
//! # Features
//!
//! - Device and sensor listings parsed into [`Device`] and [`Sensor`]
//! - On/off and dim commands reported as a unified [`State`]
//! - Pluggable process execution through [`executor::CommandExecutor`]
//! - TOML / environment configuration and `tracing` based logging

pub mod config;
pub mod data;
pub mod error;
pub mod executor;
pub mod logging;
pub mod parser;
pub mod repository;

// Test support modules - available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

// Re-export main types for convenience
pub use config::TelldusConfig;
pub use data::{Device, DeviceType, LastSentCommand, Sensor, SensorProtocol, State, SwitchState};
pub use error::{Result, TelldusError};
pub use repository::{CliRepository, TelldusRepository};
