//! Bencode encoding for tracker responses.
//!
//! Only the encoding half of the format is implemented: the tracker never has
//! to read bencoded input, it only writes announce and failure responses.
//!
//! # Format
//!
//! - Integer: `i<decimal>e`, e.g. `i42e`, `i-7e`
//! - Byte string: `<length>:<bytes>`, the length counts raw bytes
//! - List: `l<items>e`
//! - Dictionary: `d<key><value>...e`, keys sorted by raw byte value
//!
//! # Example
//!
//! ```rust
//! use swarm_tracker::{ben_int, ben_map};
//!
//! let encoded = ben_map! {
//!     "b" => ben_int!(1),
//!     "a" => ben_int!(2)
//! }.encode();
//! assert_eq!(encoded, b"d1:ai2e1:bi1ee".to_vec());
//! ```

/// Bencode value and error enumerations.
pub mod enums;

/// Implementation blocks for the value type.
pub mod impls;

/// Encoding entry points and builder macros.
#[allow(clippy::module_inception)]
pub mod bencode;

/// Unit tests for the codec.
pub mod tests;
