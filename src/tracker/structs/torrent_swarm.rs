use std::collections::BTreeMap;
use std::time::Instant;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::torrent_peer::TorrentPeer;

/// All peers announcing one info hash.
///
/// `seeders` and `leechers` are maintained incrementally and always equal the
/// number of peers in the `Seeding` and `Leeching` states.
#[derive(Clone, Debug)]
pub struct TorrentSwarm {
    pub peers: BTreeMap<PeerId, TorrentPeer>,
    pub seeders: u64,
    pub leechers: u64,
    pub updated: Instant,
}
