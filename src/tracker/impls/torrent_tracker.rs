use std::sync::Arc;
use crate::config::structs::configuration::Configuration;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::torrent_sharding::TorrentSharding;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    #[tracing::instrument(level = "debug")]
    pub fn new(config: Arc<Configuration>) -> TorrentTracker
    {
        TorrentTracker {
            config,
            torrents_sharding: Arc::new(TorrentSharding::new()),
            stats: Arc::new(StatsAtomics::new()),
        }
    }
}
