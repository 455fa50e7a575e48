use serde::{Deserialize, Serialize};

/// Point-in-time copy of [`StatsAtomics`](crate::stats::structs::stats_atomics::StatsAtomics).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub started: i64,
    pub timestamp_run_timeout: i64,
    pub timestamp_run_console: i64,
    pub torrents: i64,
    pub seeds: i64,
    /// Leeching peers.
    pub peers: i64,
    pub peers_evicted: i64,
    pub tcp4_connections_handled: i64,
    pub tcp4_announces_handled: i64,
    pub tcp4_not_found: i64,
    pub tcp4_failure: i64,
    pub tcp6_connections_handled: i64,
    pub tcp6_announces_handled: i64,
    pub tcp6_not_found: i64,
    pub tcp6_failure: i64,
}
