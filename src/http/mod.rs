//! HTTP tracker protocol implementation.
//!
//! Serves the announce endpoint of the BitTorrent tracker protocol (BEP 3)
//! with compact peer lists (BEP 23).
//!
//! # Endpoints
//!
//! - `{announce_path}` and `{announce_path}/` - Handle peer announcements
//! - anything else - failure code 600, or 100 when the method is not GET
//!
//! # Features
//!
//! - Multiple concurrent HTTP server instances
//! - Real IP header support for proxied requests
//!
//! # Response Format
//!
//! Responses are bencoded dictionaries sent with status 200 and
//! `Content-Type: text/plain`, failures included.

/// Data structures for HTTP request/response handling.
pub mod structs;

/// Type aliases for HTTP module.
pub mod types;

/// Core HTTP service implementation.
#[allow(clippy::module_inception)]
pub mod http;
