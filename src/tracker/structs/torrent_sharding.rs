//! Sharded swarm storage for concurrent access.

use std::collections::BTreeMap;
use std::sync::Arc;
use parking_lot::RwLock;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::torrent_swarm::TorrentSwarm;

/// Sharded storage for swarms with 256 shards.
///
/// Swarms are assigned to shards based on the first byte of their info hash,
/// `shard_index = info_hash[0]`. Info hashes are SHA-1 digests so the
/// distribution is close to uniform.
///
/// Each shard is an `Arc<RwLock<...>>` from `parking_lot`. Writers only
/// block their own shard; other shards stay available.
#[derive(Debug)]
pub struct TorrentSharding {
    /// Shard assignment: `shards[info_hash.0[0]]`
    pub shards: [Arc<RwLock<BTreeMap<InfoHash, TorrentSwarm>>>; 256],
}
