use std::time::Instant;
use crate::tracker::enums::peer_state::PeerState;
use crate::tracker::structs::peer_id::PeerId;

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct TorrentPeer {
    pub peer_id: PeerId,
    pub address: String,
    pub port: u32,
    pub uploaded: u64,
    pub downloaded: u64,
    pub left: Option<u64>,
    pub state: PeerState,
    pub updated: Instant,
}
