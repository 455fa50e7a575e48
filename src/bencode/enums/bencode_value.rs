use std::collections::BTreeMap;

/// A single bencode value.
///
/// Dictionary keys are raw byte strings held in a `BTreeMap`, so iteration
/// order is always the byte-wise sort order the format requires.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum BencodeValue {
    Integer(i64),
    Bytes(Vec<u8>),
    List(Vec<BencodeValue>),
    Dict(BTreeMap<Vec<u8>, BencodeValue>),
}
