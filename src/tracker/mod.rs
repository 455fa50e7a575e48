//! Core BitTorrent tracker implementation.
//!
//! Holds the live state of every swarm and implements the announce protocol
//! on top of it.
//!
//! # Architecture
//!
//! The tracker uses a sharded architecture for peer storage:
//! - Swarms are distributed across 256 shards based on the first byte of the info hash
//! - Each shard is protected by a `RwLock`; every announce and every sweep pass
//!   holds the shard's write lock for the whole read-modify-write
//! - Statistics are tracked atomically for thread-safe updates
//!
//! # Peer state machine
//!
//! A peer is `Unknown` until it announces `started` (becoming `Leeching`) or
//! reports `left=0` / `completed` (becoming `Seeding`). `stopped` and idle
//! eviction remove it. Swarm counters are adjusted from the state a peer
//! leaves and the state it enters, so they always equal the number of peers
//! in each state.
//!
//! # Example
//!
//! ```rust
//! use std::net::{IpAddr, Ipv4Addr};
//! use std::sync::Arc;
//! use swarm_tracker::common::common::parse_query;
//! use swarm_tracker::config::structs::configuration::Configuration;
//! use swarm_tracker::tracker::structs::torrent_tracker::TorrentTracker;
//!
//! let tracker = TorrentTracker::new(Arc::new(Configuration::init()));
//! let query = parse_query(Some(String::from(
//!     "info_hash=aaaaaaaaaaaaaaaaaaaa&peer_id=bbbbbbbbbbbbbbbbbbbb&port=6881&left=10&event=started"
//! ))).unwrap();
//! let body = tracker.announce(IpAddr::V4(Ipv4Addr::LOCALHOST), &query);
//! assert!(body.starts_with(b"d8:intervali60e"));
//! ```

/// Enumerations for tracker operations.
pub mod enums;

/// Implementation blocks for tracker structs.
pub mod impls;

/// Data structures for tracker operations.
pub mod structs;
