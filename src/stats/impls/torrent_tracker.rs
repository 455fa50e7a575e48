use std::sync::atomic::Ordering;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    pub fn get_stats(&self) -> Stats
    {
        Stats {
            started: self.stats.started.load(Ordering::SeqCst),
            timestamp_run_timeout: self.stats.timestamp_run_timeout.load(Ordering::SeqCst),
            timestamp_run_console: self.stats.timestamp_run_console.load(Ordering::SeqCst),
            torrents: self.stats.torrents.load(Ordering::SeqCst),
            seeds: self.stats.seeds.load(Ordering::SeqCst),
            peers: self.stats.peers.load(Ordering::SeqCst),
            peers_evicted: self.stats.peers_evicted.load(Ordering::SeqCst),
            tcp4_connections_handled: self.stats.tcp4_connections_handled.load(Ordering::SeqCst),
            tcp4_announces_handled: self.stats.tcp4_announces_handled.load(Ordering::SeqCst),
            tcp4_not_found: self.stats.tcp4_not_found.load(Ordering::SeqCst),
            tcp4_failure: self.stats.tcp4_failure.load(Ordering::SeqCst),
            tcp6_connections_handled: self.stats.tcp6_connections_handled.load(Ordering::SeqCst),
            tcp6_announces_handled: self.stats.tcp6_announces_handled.load(Ordering::SeqCst),
            tcp6_not_found: self.stats.tcp6_not_found.load(Ordering::SeqCst),
            tcp6_failure: self.stats.tcp6_failure.load(Ordering::SeqCst),
        }
    }

    /// Adds `value` (which may be negative) to the counter behind `event`.
    pub fn update_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        if value != 0 {
            self.stats.counter(event).fetch_add(value, Ordering::SeqCst);
        }
        self.get_stats()
    }

    pub fn set_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        self.stats.counter(event).store(value, Ordering::SeqCst);
        self.get_stats()
    }
}
