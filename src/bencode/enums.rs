//! Bencode enumerations.

/// A value that can be written in bencode.
pub mod bencode_value;

/// Errors raised when converting dynamic data into bencode.
pub mod bencode_error;
