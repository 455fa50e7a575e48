use std::collections::BTreeMap;
use std::time::Instant;
use rand::RngExt;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::enums::peer_state::PeerState;
use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::torrent_peer::TorrentPeer;
use crate::tracker::structs::torrent_swarm::TorrentSwarm;

impl Default for TorrentSwarm {
    fn default() -> Self {
        Self::new()
    }
}

impl TorrentSwarm {
    pub fn new() -> TorrentSwarm {
        TorrentSwarm {
            peers: BTreeMap::new(),
            seeders: 0,
            leechers: 0,
            updated: Instant::now(),
        }
    }

    pub fn get_or_create_peer(&mut self, peer_id: PeerId) -> &mut TorrentPeer {
        self.peers.entry(peer_id).or_insert_with(|| TorrentPeer::new(peer_id))
    }

    /// Applies one announce to the requesting peer and the swarm counters.
    ///
    /// A `stopped` announce removes the peer and returns it.
    pub fn apply_announce(&mut self, request: &AnnounceQueryRequest) -> Option<TorrentPeer> {
        let (previous, current) = {
            let peer = self.get_or_create_peer(request.peer_id);
            peer.address = request.peer_address();
            peer.port = request.port;
            let previous = peer.update_status(request);
            (previous, peer.state)
        };
        self.shift_counters(previous, current);
        self.updated = Instant::now();

        if request.event == AnnounceEvent::Stopped {
            return self.remove_peer(&request.peer_id);
        }
        None
    }

    pub fn remove_peer(&mut self, peer_id: &PeerId) -> Option<TorrentPeer> {
        let peer = self.peers.remove(peer_id)?;
        self.shift_counters(peer.state, PeerState::Unknown);
        Some(peer)
    }

    /// Removes every peer last seen before `cutoff`, returning how many were removed.
    pub fn remove_idle_peers(&mut self, cutoff: Instant) -> u64 {
        let expired: Vec<PeerId> = self.peers.iter()
            .filter(|(_, peer)| peer.updated < cutoff)
            .map(|(peer_id, _)| *peer_id)
            .collect();
        for peer_id in &expired {
            self.remove_peer(peer_id);
        }
        expired.len() as u64
    }

    pub fn select_peers(&self, numwant: usize, requesting_peer: &PeerId) -> Vec<&TorrentPeer> {
        self.select_peers_with_rng(numwant, requesting_peer, &mut rand::rng())
    }

    /// Picks `numwant` distinct peers other than `requesting_peer`, uniformly
    /// at random, or all of them when there are not more than `numwant`.
    pub fn select_peers_with_rng<R: RngExt>(&self, numwant: usize, requesting_peer: &PeerId, rng: &mut R) -> Vec<&TorrentPeer> {
        let mut candidates: Vec<&TorrentPeer> = self.peers.values()
            .filter(|peer| &peer.peer_id != requesting_peer)
            .collect();
        if numwant >= candidates.len() {
            return candidates;
        }

        // Partial Fisher-Yates: the first `numwant` slots end up a uniform sample.
        for index in 0..numwant {
            let pick = rng.random_range(index..candidates.len());
            candidates.swap(index, pick);
        }
        candidates.truncate(numwant);
        candidates
    }

    fn shift_counters(&mut self, from: PeerState, to: PeerState) {
        if from == to {
            return;
        }
        match from {
            PeerState::Leeching => { self.leechers -= 1; }
            PeerState::Seeding => { self.seeders -= 1; }
            PeerState::Unknown => {}
        }
        match to {
            PeerState::Leeching => { self.leechers += 1; }
            PeerState::Seeding => { self.seeders += 1; }
            PeerState::Unknown => {}
        }
    }
}
