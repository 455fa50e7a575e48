use thiserror::Error;

/// A rejected request. The message and [`code`](AnnounceError::code) are sent
/// back to the client as a bencoded failure dictionary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnnounceError {
    #[error("Invalid request type: client request was not a HTTP GET.")]
    InvalidRequestType,
    #[error("Missing info_hash.")]
    MissingInfoHash,
    #[error("Missing peer_id.")]
    MissingPeerId,
    #[error("Missing port.")]
    MissingPort,
    #[error("Invalid port.")]
    InvalidPort,
    #[error("Invalid infohash: infohash is {0} bytes long.")]
    InvalidInfoHash(usize),
    #[error("Invalid peerid: peerid is {0} bytes long.")]
    InvalidPeerId(usize),
    #[error("Invalid URL.")]
    InvalidUrl,
}
