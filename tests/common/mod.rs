#![allow(dead_code)]
use rand::RngExt;
use std::sync::Arc;
use tempfile::TempDir;
use swarm_tracker::common::common::{parse_query, QueryMap};
use swarm_tracker::config::structs::configuration::Configuration;
use swarm_tracker::config::structs::http_trackers_config::HttpTrackersConfig;
use swarm_tracker::tracker::structs::info_hash::InfoHash;
use swarm_tracker::tracker::structs::peer_id::PeerId;
use swarm_tracker::tracker::structs::torrent_tracker::TorrentTracker;

pub type TestTracker = Arc<TorrentTracker>;
pub type TestConfig = Arc<Configuration>;

pub fn create_test_config() -> TestConfig {
    let mut config: Configuration = Configuration::init();
    config.log_level = String::from("debug");
    Arc::new(config)
}

pub fn create_test_http_config() -> Arc<HttpTrackersConfig> {
    Arc::new(HttpTrackersConfig {
        enabled: true,
        bind_address: "127.0.0.1:8080".to_string(),
        announce_path: "/announce".to_string(),
        real_ip: String::new(),
        keep_alive: 5,
        request_timeout: 10,
        disconnect_timeout: 5,
        threads: 4,
    })
}

pub fn create_test_tracker() -> TestTracker {
    Arc::new(TorrentTracker::new(create_test_config()))
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn random_info_hash() -> InfoHash {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    InfoHash(bytes)
}

pub fn random_peer_id() -> PeerId {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    PeerId(bytes)
}

/// Percent-encodes every byte, the way clients send binary hashes.
pub fn url_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|byte| format!("%{byte:02X}")).collect()
}

pub fn announce_query_string(info_hash: &InfoHash, peer_id: &PeerId, port: u16, extra: &str) -> String {
    let mut query = format!(
        "info_hash={}&peer_id={}&port={}",
        url_encode(&info_hash.0),
        url_encode(&peer_id.0),
        port
    );
    if !extra.is_empty() {
        query.push('&');
        query.push_str(extra);
    }
    query
}

pub fn announce_query(info_hash: &InfoHash, peer_id: &PeerId, port: u16, extra: &str) -> QueryMap {
    parse_query(Some(announce_query_string(info_hash, peer_id, port, extra))).expect("query parses")
}
