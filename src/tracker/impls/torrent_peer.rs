use std::time::Instant;
use crate::bencode::enums::bencode_value::BencodeValue;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::enums::peer_state::PeerState;
use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::torrent_peer::TorrentPeer;
use crate::{ben_bytes, ben_int, ben_map};

impl TorrentPeer {
    pub fn new(peer_id: PeerId) -> TorrentPeer {
        TorrentPeer {
            peer_id,
            address: String::new(),
            port: 0,
            uploaded: 0,
            downloaded: 0,
            left: None,
            state: PeerState::Unknown,
            updated: Instant::now(),
        }
    }

    /// Refreshes the transfer counters and applies the `left` and event
    /// transitions, returning the state the peer was in before.
    ///
    /// `stopped` is not handled here; the swarm removes the peer instead.
    pub fn update_status(&mut self, request: &AnnounceQueryRequest) -> PeerState {
        let previous = self.state;

        if let Some(uploaded) = request.uploaded {
            self.uploaded = uploaded;
        }
        if let Some(downloaded) = request.downloaded {
            self.downloaded = downloaded;
        }
        if request.left.is_some() {
            self.left = request.left;
        }
        self.updated = Instant::now();

        if request.left == Some(0) {
            self.state = PeerState::Seeding;
        }
        match request.event {
            AnnounceEvent::Started if self.state == PeerState::Unknown => {
                self.state = PeerState::Leeching;
            }
            AnnounceEvent::Completed => {
                self.state = PeerState::Seeding;
            }
            _ => {}
        }

        previous
    }

    /// Packs the peer as 4 address bytes and a big-endian port.
    ///
    /// Returns `None` for anything but a dotted-quad address or a port outside
    /// `1..=65535`.
    pub fn compact(&self) -> Option<[u8; 6]> {
        if !(1..=65535).contains(&self.port) {
            return None;
        }
        let mut octets = self.address.split('.');
        let mut compact = [0u8; 6];
        for slot in compact.iter_mut().take(4) {
            let octet = octets.next()?;
            if octet.is_empty() || octet.len() > 3 || !octet.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            *slot = octet.parse::<u8>().ok()?;
        }
        if octets.next().is_some() {
            return None;
        }
        compact[4..].copy_from_slice(&(self.port as u16).to_be_bytes());
        Some(compact)
    }

    pub fn dict(&self, no_peer_id: bool) -> BencodeValue {
        let mut peer = ben_map! {
            "ip" => ben_bytes!(&self.address),
            "port" => ben_int!(self.port)
        };
        if !no_peer_id {
            if let Some(map) = peer.dict_mut() {
                map.insert(b"id".to_vec(), ben_bytes!(self.peer_id.0));
            }
        }
        peer
    }
}
