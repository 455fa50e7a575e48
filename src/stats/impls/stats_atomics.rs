use std::sync::atomic::AtomicI64;
use chrono::Utc;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl Default for StatsAtomics {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsAtomics {
    pub fn new() -> StatsAtomics {
        StatsAtomics {
            started: AtomicI64::new(Utc::now().timestamp()),
            timestamp_run_timeout: AtomicI64::new(0),
            timestamp_run_console: AtomicI64::new(0),
            torrents: AtomicI64::new(0),
            seeds: AtomicI64::new(0),
            peers: AtomicI64::new(0),
            peers_evicted: AtomicI64::new(0),
            tcp4_connections_handled: AtomicI64::new(0),
            tcp4_announces_handled: AtomicI64::new(0),
            tcp4_not_found: AtomicI64::new(0),
            tcp4_failure: AtomicI64::new(0),
            tcp6_connections_handled: AtomicI64::new(0),
            tcp6_announces_handled: AtomicI64::new(0),
            tcp6_not_found: AtomicI64::new(0),
            tcp6_failure: AtomicI64::new(0),
        }
    }

    pub fn counter(&self, event: StatsEvent) -> &AtomicI64 {
        match event {
            StatsEvent::Torrents => &self.torrents,
            StatsEvent::Seeds => &self.seeds,
            StatsEvent::Peers => &self.peers,
            StatsEvent::PeersEvicted => &self.peers_evicted,
            StatsEvent::TimestampTimeout => &self.timestamp_run_timeout,
            StatsEvent::TimestampConsole => &self.timestamp_run_console,
            StatsEvent::Tcp4ConnectionsHandled => &self.tcp4_connections_handled,
            StatsEvent::Tcp4AnnouncesHandled => &self.tcp4_announces_handled,
            StatsEvent::Tcp4NotFound => &self.tcp4_not_found,
            StatsEvent::Tcp4Failure => &self.tcp4_failure,
            StatsEvent::Tcp6ConnectionsHandled => &self.tcp6_connections_handled,
            StatsEvent::Tcp6AnnouncesHandled => &self.tcp6_announces_handled,
            StatsEvent::Tcp6NotFound => &self.tcp6_not_found,
            StatsEvent::Tcp6Failure => &self.tcp6_failure,
        }
    }
}
