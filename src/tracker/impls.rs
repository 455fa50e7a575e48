//! Implementation blocks for tracker data structures.

/// AnnounceEvent implementation: parsing from the query value.
pub mod announce_event;

/// AnnounceError implementation: failure codes and bencoded failure body.
pub mod announce_error;

/// AnnounceQueryRequest implementation: peer address resolution.
pub mod announce_query_request;

/// InfoHash implementation: Display, TryFrom.
pub mod info_hash;

/// PeerId implementation: Display, TryFrom.
pub mod peer_id;

/// TorrentPeer implementation: state transitions and response encodings.
pub mod torrent_peer;

/// TorrentSwarm implementation: counters, removal and peer selection.
pub mod torrent_swarm;

/// TorrentSharding implementation: shard access and idle peer cleanup.
pub mod torrent_sharding;

/// TorrentTracker core implementation: initialization.
pub mod torrent_tracker;

/// TorrentTracker swarm management methods.
pub mod torrent_tracker_peers;

/// TorrentTracker announce request handlers.
pub mod torrent_tracker_handlers;
