use std::collections::btree_map::Entry;
use std::time::{Duration, Instant};
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::torrent_peer::TorrentPeer;
use crate::tracker::structs::torrent_swarm::TorrentSwarm;
use crate::tracker::structs::torrent_tracker::TorrentTracker;

impl TorrentTracker {
    /// Returns a snapshot of the swarm, registering an empty one first if needed.
    ///
    /// A swarm registered here counts in the `Torrents` statistic and stays
    /// until a sweep pass drops it for being empty. Announces go through
    /// [`TorrentTracker::update_swarm`] instead, which never leaves an empty
    /// swarm behind.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn get_or_create_swarm(&self, info_hash: InfoHash) -> TorrentSwarm
    {
        let (swarm, created) = {
            let mut shard = self.torrents_sharding.get_shard(&info_hash).write();
            match shard.entry(info_hash) {
                Entry::Occupied(entry) => (entry.get().clone(), false),
                Entry::Vacant(entry) => (entry.insert(TorrentSwarm::new()).clone(), true)
            }
        };
        if created {
            self.update_stats(StatsEvent::Torrents, 1);
        }
        swarm
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn get_swarm(&self, info_hash: InfoHash) -> Option<TorrentSwarm>
    {
        self.torrents_sharding.get_shard(&info_hash).read().get(&info_hash).cloned()
    }

    /// Runs `update` on the swarm of `info_hash` while holding its shard's write
    /// lock, creating the swarm first if needed.
    ///
    /// A swarm left without peers is dropped. Counter statistics follow the
    /// swarm's change.
    pub fn update_swarm<F, R>(&self, info_hash: InfoHash, update: F) -> R
    where
        F: FnOnce(&mut TorrentSwarm) -> R,
    {
        let mut shard = self.torrents_sharding.get_shard(&info_hash).write();
        let created = !shard.contains_key(&info_hash);
        let swarm = shard.entry(info_hash).or_default();
        let (seeders, leechers) = (swarm.seeders as i64, swarm.leechers as i64);
        let result = update(swarm);
        let seeds_delta = swarm.seeders as i64 - seeders;
        let peers_delta = swarm.leechers as i64 - leechers;
        let removed = swarm.peers.is_empty();
        if removed {
            shard.remove(&info_hash);
        }
        drop(shard);

        match (created, removed) {
            (true, false) => { self.update_stats(StatsEvent::Torrents, 1); }
            (false, true) => { self.update_stats(StatsEvent::Torrents, -1); }
            _ => {}
        }
        if seeds_delta != 0 {
            self.update_stats(StatsEvent::Seeds, seeds_delta);
        }
        if peers_delta != 0 {
            self.update_stats(StatsEvent::Peers, peers_delta);
        }
        result
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn remove_torrent_peer(&self, info_hash: InfoHash, peer_id: PeerId) -> Option<TorrentPeer>
    {
        if !self.torrents_sharding.contains_torrent(&info_hash) {
            return None;
        }
        self.update_swarm(info_hash, |swarm| swarm.remove_peer(&peer_id))
    }

    /// Evicts peers idle for longer than `peers_timeout`.
    ///
    /// Returns `(swarms_removed, peers_removed)`.
    pub fn sweep(&self) -> (u64, u64)
    {
        let peers_timeout = Duration::from_secs(self.config.tracker_config.peers_timeout);
        match Instant::now().checked_sub(peers_timeout) {
            Some(cutoff) => self.sweep_before(cutoff),
            None => (0, 0),
        }
    }

    pub fn sweep_before(&self, cutoff: Instant) -> (u64, u64)
    {
        let (mut torrents_removed, mut peers_removed, mut seeds_removed, mut leechers_removed) = (0u64, 0u64, 0u64, 0u64);
        for shard in 0..=u8::MAX {
            let (torrents, peers, seeds, leechers) = self.torrents_sharding.cleanup_shard(shard, cutoff);
            torrents_removed += torrents;
            peers_removed += peers;
            seeds_removed += seeds;
            leechers_removed += leechers;
        }

        self.update_stats(StatsEvent::Torrents, -(torrents_removed as i64));
        self.update_stats(StatsEvent::Seeds, -(seeds_removed as i64));
        self.update_stats(StatsEvent::Peers, -(leechers_removed as i64));
        self.update_stats(StatsEvent::PeersEvicted, peers_removed as i64);
        (torrents_removed, peers_removed)
    }
}
