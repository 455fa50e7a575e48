use std::net::IpAddr;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnnounceQueryRequest {
    pub info_hash: InfoHash,
    pub peer_id: PeerId,
    pub port: u32,
    pub uploaded: Option<u64>,
    pub downloaded: Option<u64>,
    pub left: Option<u64>,
    pub event: AnnounceEvent,
    /// Address advertised through the `ip` field, used instead of `remote_addr`.
    pub ip: Option<String>,
    pub remote_addr: IpAddr,
    pub numwant: u64,
    pub compact: bool,
    pub no_peer_id: bool,
}
