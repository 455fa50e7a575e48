#[cfg(test)]
mod stats_tests {
    mod stats_atomics_tests {
        use std::sync::atomic::Ordering;
        use crate::stats::enums::stats_event::StatsEvent;
        use crate::stats::structs::stats_atomics::StatsAtomics;

        #[test]
        fn test_new_sets_started() {
            let stats = StatsAtomics::new();
            assert!(stats.started.load(Ordering::SeqCst) > 0);
            assert_eq!(stats.torrents.load(Ordering::SeqCst), 0);
        }

        #[test]
        fn test_counter_lookup() {
            let stats = StatsAtomics::new();
            stats.counter(StatsEvent::Tcp6Failure).fetch_add(3, Ordering::SeqCst);
            assert_eq!(stats.tcp6_failure.load(Ordering::SeqCst), 3);
            assert_eq!(stats.tcp4_failure.load(Ordering::SeqCst), 0);
        }
    }

    mod torrent_tracker_stats_tests {
        use std::sync::Arc;
        use crate::config::structs::configuration::Configuration;
        use crate::stats::enums::stats_event::StatsEvent;
        use crate::tracker::structs::torrent_tracker::TorrentTracker;

        #[test]
        fn test_update_stats_adds_and_subtracts() {
            let tracker = TorrentTracker::new(Arc::new(Configuration::init()));
            tracker.update_stats(StatsEvent::Seeds, 5);
            let stats = tracker.update_stats(StatsEvent::Seeds, -2);
            assert_eq!(stats.seeds, 3);
        }

        #[test]
        fn test_set_stats_overwrites() {
            let tracker = TorrentTracker::new(Arc::new(Configuration::init()));
            tracker.update_stats(StatsEvent::TimestampConsole, 10);
            let stats = tracker.set_stats(StatsEvent::TimestampConsole, 1_700_000_000);
            assert_eq!(stats.timestamp_run_console, 1_700_000_000);
        }

        #[test]
        fn test_stats_snapshot_serializes() {
            let tracker = TorrentTracker::new(Arc::new(Configuration::init()));
            tracker.update_stats(StatsEvent::Tcp4NotFound, 1);
            let json = serde_json::to_value(tracker.get_stats()).unwrap();
            assert_eq!(json["tcp4_not_found"], 1);
            assert_eq!(json["torrents"], 0);
        }
    }
}
