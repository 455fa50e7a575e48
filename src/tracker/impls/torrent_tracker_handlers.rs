use std::net::IpAddr;
use std::str::FromStr;
use log::debug;
use crate::bencode::enums::bencode_value::BencodeValue;
use crate::common::common::QueryMap;
use crate::tracker::enums::announce_error::AnnounceError;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use crate::{ben_int, ben_map};

impl TorrentTracker {
    /// Checks the required fields in order and builds the typed request.
    ///
    /// Nothing is mutated here, so a rejected announce leaves all state untouched.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn validate_announce(&self, remote_addr: IpAddr, query: &QueryMap) -> Result<AnnounceQueryRequest, AnnounceError>
    {
        fn first<'a>(query: &'a QueryMap, field: &str) -> Option<&'a [u8]> {
            query.get(field)
                .and_then(|values| values.first())
                .map(|value| value.as_slice())
        }

        fn parse_optional<T: FromStr>(query: &QueryMap, field: &str) -> Option<T> {
            let value = first(query, field)?;
            let parsed = std::str::from_utf8(value).ok().and_then(|text| text.parse::<T>().ok());
            if parsed.is_none() {
                debug!("[ANNOUNCE] Ignoring unparsable {field}: {}", String::from_utf8_lossy(value));
            }
            parsed
        }

        let info_hash_bytes = first(query, "info_hash").ok_or(AnnounceError::MissingInfoHash)?;
        let info_hash = InfoHash::try_from(info_hash_bytes)
            .map_err(|_| AnnounceError::InvalidInfoHash(info_hash_bytes.len()))?;

        let peer_id_bytes = first(query, "peer_id").ok_or(AnnounceError::MissingPeerId)?;
        let peer_id = PeerId::try_from(peer_id_bytes)
            .map_err(|_| AnnounceError::InvalidPeerId(peer_id_bytes.len()))?;

        let port_bytes = first(query, "port").ok_or(AnnounceError::MissingPort)?;
        let port = std::str::from_utf8(port_bytes).ok()
            .and_then(|text| text.parse::<u32>().ok())
            .ok_or(AnnounceError::InvalidPort)?;

        let tracker_config = &self.config.tracker_config;
        let numwant = parse_optional::<u64>(query, "numwant")
            .unwrap_or(tracker_config.default_numwant)
            .min(tracker_config.max_numwant);

        let ip = first(query, "ip")
            .filter(|value| !value.is_empty())
            .map(|value| String::from_utf8_lossy(value).into_owned());

        Ok(AnnounceQueryRequest {
            info_hash,
            peer_id,
            port,
            uploaded: parse_optional::<u64>(query, "uploaded"),
            downloaded: parse_optional::<u64>(query, "downloaded"),
            left: parse_optional::<u64>(query, "left"),
            event: first(query, "event").map(AnnounceEvent::from_bytes).unwrap_or_default(),
            ip,
            remote_addr,
            numwant,
            compact: query.contains_key("compact"),
            no_peer_id: query.contains_key("no_peer_id"),
        })
    }

    /// Applies a validated announce to its swarm and builds the response dictionary.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn handle_announce(&self, announce_query: &AnnounceQueryRequest) -> BencodeValue
    {
        let interval = self.config.tracker_config.request_interval;
        self.update_swarm(announce_query.info_hash, |swarm| {
            if let Some(peer) = swarm.apply_announce(announce_query) {
                debug!("[HANDLE ANNOUNCE] Removed peer {} from {}", peer.peer_id, announce_query.info_hash);
                return ben_map! {
                    "interval" => ben_int!(interval),
                    "seeders" => ben_int!(swarm.seeders),
                    "leechers" => ben_int!(swarm.leechers)
                };
            }

            let selected = swarm.select_peers(announce_query.numwant as usize, &announce_query.peer_id);
            let peers = if announce_query.compact {
                let mut compact = Vec::with_capacity(selected.len() * 6);
                for peer in selected.iter().filter_map(|peer| peer.compact()) {
                    compact.extend_from_slice(&peer);
                }
                BencodeValue::Bytes(compact)
            } else {
                BencodeValue::List(selected.iter().map(|peer| peer.dict(announce_query.no_peer_id)).collect())
            };

            ben_map! {
                "interval" => ben_int!(interval),
                "seeders" => ben_int!(swarm.seeders),
                "leechers" => ben_int!(swarm.leechers),
                "peers" => peers
            }
        })
    }

    /// Validates and handles one announce, returning the bencoded response
    /// or failure body.
    pub fn announce(&self, remote_addr: IpAddr, query: &QueryMap) -> Vec<u8>
    {
        match self.validate_announce(remote_addr, query) {
            Ok(announce_query) => self.handle_announce(&announce_query).encode(),
            Err(error) => {
                debug!("[ANNOUNCE] Rejected: {error}");
                error.to_bencode().encode()
            }
        }
    }
}
