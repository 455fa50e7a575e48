//! Implementation blocks for bencode types.

/// BencodeValue implementation: encoding, conversions.
pub mod bencode_value;
