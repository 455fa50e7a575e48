//! Statistics tracking module.
//!
//! Atomic counters for swarm totals and HTTP announce traffic, safe to update
//! from every worker thread without locking.
//!
//! # Statistics
//!
//! - Torrents (swarms), seeding and leeching peer totals
//! - Peers evicted by the idle sweep
//! - TCP IPv4/IPv6 connections, announces, failures and unknown paths
//! - Start time and the last sweep/console timestamps
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use swarm_tracker::config::structs::configuration::Configuration;
//! use swarm_tracker::stats::enums::stats_event::StatsEvent;
//! use swarm_tracker::tracker::structs::torrent_tracker::TorrentTracker;
//!
//! let tracker = TorrentTracker::new(Arc::new(Configuration::init()));
//! tracker.update_stats(StatsEvent::Tcp4AnnouncesHandled, 1);
//! assert_eq!(tracker.get_stats().tcp4_announces_handled, 1);
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters).
pub mod structs;

/// Unit tests for statistics functionality.
pub mod tests;
