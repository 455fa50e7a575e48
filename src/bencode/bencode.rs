use serde_json::Value;
use crate::bencode::enums::bencode_error::BencodeError;
use crate::bencode::enums::bencode_value::BencodeValue;

pub fn encode(value: &BencodeValue) -> Vec<u8>
{
    value.encode()
}

/// Encodes loosely typed data, e.g. a response assembled as JSON.
///
/// Fails with [`BencodeError::UnsupportedType`] on `null`, booleans and
/// non-integral numbers, none of which exist in bencode.
pub fn encode_json(value: &Value) -> Result<Vec<u8>, BencodeError>
{
    Ok(BencodeValue::try_from(value)?.encode())
}

#[doc(hidden)]
pub fn key_bytes<K: AsRef<[u8]>>(key: K) -> Vec<u8>
{
    key.as_ref().to_vec()
}

/// Builds an integer value, saturating at `i64::MAX` for larger unsigned inputs.
#[macro_export]
macro_rules! ben_int {
    ($value:expr) => {
        $crate::bencode::enums::bencode_value::BencodeValue::Integer(
            ::std::convert::TryFrom::try_from($value).unwrap_or(i64::MAX)
        )
    };
}

#[macro_export]
macro_rules! ben_bytes {
    ($value:expr) => {
        $crate::bencode::enums::bencode_value::BencodeValue::bytes($value)
    };
}

#[macro_export]
macro_rules! ben_list {
    () => {
        $crate::bencode::enums::bencode_value::BencodeValue::List(Vec::new())
    };
    ($($value:expr),+ $(,)?) => {
        $crate::bencode::enums::bencode_value::BencodeValue::List(vec![$($value),+])
    };
}

#[macro_export]
macro_rules! ben_map {
    () => {
        $crate::bencode::enums::bencode_value::BencodeValue::Dict(::std::collections::BTreeMap::new())
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = ::std::collections::BTreeMap::new();
        $(
            map.insert($crate::bencode::bencode::key_bytes($key), $value);
        )+
        $crate::bencode::enums::bencode_value::BencodeValue::Dict(map)
    }};
}
