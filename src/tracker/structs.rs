//! Data structures for BitTorrent tracker operations.

/// Main tracker instance struct.
pub mod torrent_tracker;

/// Validated announce request.
pub mod announce_query_request;

/// 20-byte torrent info hash identifier.
pub mod info_hash;

/// 20-byte peer identifier.
pub mod peer_id;

/// Individual peer information.
pub mod torrent_peer;

/// Peers of one info hash plus their seeder/leecher counters.
pub mod torrent_swarm;

/// Sharded swarm storage.
pub mod torrent_sharding;
