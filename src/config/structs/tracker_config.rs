use serde::{Deserialize, Serialize};

/// All durations are in seconds.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    pub request_interval: u64,
    pub default_numwant: u64,
    pub max_numwant: u64,
    pub peers_timeout: u64,
    pub peers_cleanup_interval: u64,
}
