use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use chrono::Utc;
use log::info;
use parking_lot::RwLock;
use tokio_shutdown::Shutdown;
use crate::common::common::shutdown_waiting;
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::torrent_sharding::TorrentSharding;
use crate::tracker::structs::torrent_swarm::TorrentSwarm;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl Default for TorrentSharding {
    fn default() -> Self {
        Self::new()
    }
}

impl TorrentSharding {
    #[tracing::instrument(level = "debug")]
    pub fn new() -> TorrentSharding {
        TorrentSharding {
            shards: std::array::from_fn(|_| Arc::new(RwLock::new(BTreeMap::new()))),
        }
    }

    /// Sweeps idle peers every `peers_cleanup_interval` seconds until shutdown.
    pub async fn cleanup_thread(&self, torrent_tracker: Arc<TorrentTracker>, shutdown: Shutdown) {
        let cleanup_interval = torrent_tracker.config.tracker_config.peers_cleanup_interval;
        loop {
            if shutdown_waiting(Duration::from_secs(cleanup_interval), shutdown.clone()).await {
                info!("[BOOT] Shutting down cleanup thread...");
                break;
            }
            let (torrents_removed, peers_removed) = torrent_tracker.sweep();
            torrent_tracker.set_stats(StatsEvent::TimestampTimeout, Utc::now().timestamp());
            info!("[PEERS] Sweep finished - Torrents removed: {torrents_removed} - Peers removed: {peers_removed}");
        }
    }

    /// Removes idle peers from one shard, then any swarm left empty.
    ///
    /// Returns `(swarms_removed, peers_removed, seeders_removed, leechers_removed)`.
    pub fn cleanup_shard(&self, shard: u8, cutoff: Instant) -> (u64, u64, u64, u64) {
        let (mut torrents_removed, mut peers_removed, mut seeds_removed, mut leechers_removed) = (0u64, 0u64, 0u64, 0u64);
        let mut shard_write = self.shards[shard as usize].write();
        if shard_write.is_empty() {
            return (0, 0, 0, 0);
        }

        shard_write.retain(|_, swarm| {
            let (seeders, leechers) = (swarm.seeders, swarm.leechers);
            peers_removed += swarm.remove_idle_peers(cutoff);
            seeds_removed += seeders - swarm.seeders;
            leechers_removed += leechers - swarm.leechers;
            if swarm.peers.is_empty() {
                torrents_removed += 1;
                return false;
            }
            true
        });

        (torrents_removed, peers_removed, seeds_removed, leechers_removed)
    }

    #[inline(always)]
    pub fn get_shard(&self, info_hash: &InfoHash) -> &Arc<RwLock<BTreeMap<InfoHash, TorrentSwarm>>> {
        &self.shards[info_hash.0[0] as usize]
    }

    pub fn contains_torrent(&self, info_hash: &InfoHash) -> bool {
        self.get_shard(info_hash).read().contains_key(info_hash)
    }

    pub fn contains_peer(&self, info_hash: &InfoHash, peer_id: &PeerId) -> bool {
        self.get_shard(info_hash).read()
            .get(info_hash)
            .map(|swarm| swarm.peers.contains_key(peer_id))
            .unwrap_or(false)
    }

    pub fn get_torrents_amount(&self) -> u64 {
        self.shards.iter()
            .map(|shard| shard.read().len() as u64)
            .sum()
    }
}
