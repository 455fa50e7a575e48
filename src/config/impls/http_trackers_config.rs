use std::thread::available_parallelism;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;

impl Default for HttpTrackersConfig {
    fn default() -> Self {
        HttpTrackersConfig {
            enabled: true,
            bind_address: String::from("0.0.0.0:6969"),
            announce_path: String::from("/announce"),
            real_ip: String::new(),
            keep_alive: 60,
            request_timeout: 15,
            disconnect_timeout: 15,
            threads: available_parallelism().map(|threads| threads.get() as u64).unwrap_or(1),
        }
    }
}
