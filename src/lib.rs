//! # Swarm Tracker
//!
//! A small and strict HTTP BitTorrent tracker built on actix-web.
//!
//! ## Overview
//!
//! The tracker answers announce requests, keeps the membership and progress
//! of every swarm in memory, and replies in bencode. Nothing is persisted
//! across restarts.
//!
//! ## Features
//!
//! - **Announce**: BEP 3 announces with compact (BEP 23) or dictionary peer lists
//! - **Swarm state**: seeder/leecher counters driven by a per-peer state machine
//! - **Peer sampling**: uniform random selection without replacement
//! - **Eviction**: periodic sweep of peers that stopped announcing
//! - **Monitoring**: atomic statistics logged to the console, optional Sentry reporting
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use swarm_tracker::config::structs::configuration::Configuration;
//! use swarm_tracker::tracker::structs::torrent_tracker::TorrentTracker;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! let tracker = TorrentTracker::new(Arc::new(config));
//! ```
//!
//! ## Modules
//!
//! - [`bencode`] - Bencode encoder for responses
//! - [`common`] - Query parsing, logging setup and shared helpers
//! - [`config`] - Configuration management and TOML parsing
//! - [`http`] - HTTP tracker protocol implementation
//! - [`stats`] - Real-time statistics tracking
//! - [`structs`] - CLI argument parsing
//! - [`tracker`] - Swarm storage, peer state machine and announce handling

/// Bencode encoding of response values.
///
/// Dictionaries are emitted with keys sorted by raw bytes, as BitTorrent
/// clients require.
pub mod bencode;

/// Common utilities and shared functionality.
///
/// Contains query parsing, logging setup and error handling used across
/// all modules.
pub mod common;

/// Configuration management module.
///
/// Handles loading, parsing, and validating configuration from TOML files.
pub mod config;

/// HTTP tracker protocol implementation.
///
/// Handles announce requests over HTTP and reports every protocol violation
/// as a bencoded failure.
pub mod http;

/// Statistics tracking and monitoring module.
pub mod stats;

/// CLI argument parsing.
pub mod structs;

/// Core tracker logic module.
///
/// Contains the sharded swarm storage, the peer state machine, peer
/// selection and the announce request handling logic.
pub mod tracker;
