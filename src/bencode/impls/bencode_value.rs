use std::collections::BTreeMap;
use serde_json::Value;
use crate::bencode::enums::bencode_error::BencodeError;
use crate::bencode::enums::bencode_value::BencodeValue;

impl BencodeValue {
    pub fn bytes<T: AsRef<[u8]>>(data: T) -> BencodeValue {
        BencodeValue::Bytes(data.as_ref().to_vec())
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut buffer = Vec::new();
        self.encode_into(&mut buffer);
        buffer
    }

    pub fn encode_into(&self, buffer: &mut Vec<u8>) {
        match self {
            BencodeValue::Integer(value) => {
                buffer.push(b'i');
                buffer.extend_from_slice(value.to_string().as_bytes());
                buffer.push(b'e');
            }
            BencodeValue::Bytes(data) => {
                Self::encode_bytes(data, buffer);
            }
            BencodeValue::List(items) => {
                buffer.push(b'l');
                for item in items {
                    item.encode_into(buffer);
                }
                buffer.push(b'e');
            }
            BencodeValue::Dict(map) => {
                buffer.push(b'd');
                for (key, value) in map {
                    Self::encode_bytes(key, buffer);
                    value.encode_into(buffer);
                }
                buffer.push(b'e');
            }
        }
    }

    fn encode_bytes(data: &[u8], buffer: &mut Vec<u8>) {
        buffer.extend_from_slice(data.len().to_string().as_bytes());
        buffer.push(b':');
        buffer.extend_from_slice(data);
    }

    pub fn list_mut(&mut self) -> Option<&mut Vec<BencodeValue>> {
        match self {
            BencodeValue::List(items) => Some(items),
            _ => None
        }
    }

    pub fn dict_mut(&mut self) -> Option<&mut BTreeMap<Vec<u8>, BencodeValue>> {
        match self {
            BencodeValue::Dict(map) => Some(map),
            _ => None
        }
    }
}

impl From<i64> for BencodeValue {
    fn from(value: i64) -> Self {
        BencodeValue::Integer(value)
    }
}

impl From<&str> for BencodeValue {
    fn from(value: &str) -> Self {
        BencodeValue::Bytes(value.as_bytes().to_vec())
    }
}

impl From<String> for BencodeValue {
    fn from(value: String) -> Self {
        BencodeValue::Bytes(value.into_bytes())
    }
}

impl From<Vec<u8>> for BencodeValue {
    fn from(value: Vec<u8>) -> Self {
        BencodeValue::Bytes(value)
    }
}

impl From<Vec<BencodeValue>> for BencodeValue {
    fn from(value: Vec<BencodeValue>) -> Self {
        BencodeValue::List(value)
    }
}

impl TryFrom<&Value> for BencodeValue {
    type Error = BencodeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Err(BencodeError::UnsupportedType("null")),
            Value::Bool(_) => Err(BencodeError::UnsupportedType("boolean")),
            Value::Number(number) => {
                if let Some(integer) = number.as_i64() {
                    return Ok(BencodeValue::Integer(integer));
                }
                if number.is_u64() {
                    return Err(BencodeError::UnsupportedType("integer above i64::MAX"));
                }
                Err(BencodeError::UnsupportedType("float"))
            }
            Value::String(string) => Ok(BencodeValue::from(string.as_str())),
            Value::Array(items) => {
                let list = items.iter()
                    .map(BencodeValue::try_from)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(BencodeValue::List(list))
            }
            Value::Object(object) => {
                let mut map = BTreeMap::new();
                for (key, item) in object {
                    map.insert(key.as_bytes().to_vec(), BencodeValue::try_from(item)?);
                }
                Ok(BencodeValue::Dict(map))
            }
        }
    }
}
