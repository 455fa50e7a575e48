/// Configuration implementation: defaults, load, save, validate.
pub mod configuration;

/// HttpTrackersConfig implementation: defaults.
pub mod http_trackers_config;
