//! Configuration management module.
//!
//! Loads and validates the tracker configuration from a TOML file.
//!
//! # Configuration Structure
//!
//! - **log_level** / **log_console_interval**: logging verbosity and stats cadence
//! - **tracker_config**: announce interval, peer counts, idle timeout, sweep period
//! - **http_server**: one entry per HTTP listener
//! - **sentry_config**: optional error reporting
//!
//! # Example
//!
//! ```rust,ignore
//! use swarm_tracker::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! ```

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

/// Unit tests for configuration.
pub mod tests;
