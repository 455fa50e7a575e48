use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BencodeError {
    #[error("unsupported type for bencode: {0}")]
    UnsupportedType(&'static str),
}
