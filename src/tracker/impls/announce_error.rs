use crate::bencode::enums::bencode_value::BencodeValue;
use crate::tracker::enums::announce_error::AnnounceError;
use crate::{ben_bytes, ben_int, ben_map};

impl AnnounceError {
    pub fn code(&self) -> i64 {
        match self {
            AnnounceError::InvalidRequestType => 100,
            AnnounceError::MissingInfoHash => 101,
            AnnounceError::MissingPeerId => 102,
            AnnounceError::MissingPort | AnnounceError::InvalidPort => 103,
            AnnounceError::InvalidInfoHash(_) => 150,
            AnnounceError::InvalidPeerId(_) => 151,
            AnnounceError::InvalidUrl => 600,
        }
    }

    pub fn to_bencode(&self) -> BencodeValue {
        ben_map! {
            "failure" => ben_bytes!(self.to_string()),
            "failure code" => ben_int!(self.code())
        }
    }
}
