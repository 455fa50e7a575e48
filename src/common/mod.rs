//! Common utilities and shared functionality.
//!
//! # Utilities
//!
//! - Query string parsing into raw byte values
//! - Logging setup
//! - Graceful shutdown waiting
//!
//! # Example
//!
//! ```rust
//! use swarm_tracker::common::common::parse_query;
//!
//! let params = parse_query(Some(String::from("port=6881&compact"))).unwrap();
//! assert_eq!(params.get("port"), Some(&vec![b"6881".to_vec()]));
//! assert!(params.contains_key("compact"));
//! ```

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

/// Unit tests for the utility functions.
pub mod tests;
