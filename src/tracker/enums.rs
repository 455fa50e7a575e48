//! Enumerations for tracker operations.

/// Announce event types from the `event` query field.
pub mod announce_event;

/// Peer progress within a swarm: unknown, leeching or seeding.
pub mod peer_state;

/// Announce failures and their wire failure codes.
pub mod announce_error;
