use std::collections::HashMap;
use std::time::Duration;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use tokio_shutdown::Shutdown;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;

pub type QueryMap = HashMap<String, Vec<Vec<u8>>>;

/// Upper bound on `&`-separated items accepted in one query string.
pub const MAX_QUERY_ITEMS: usize = 64;

/// Splits a raw query string into percent-decoded values.
///
/// Keys are lowercased text, values stay raw bytes since `info_hash` and
/// `peer_id` are binary. A key without `=` is kept with no values so it can be
/// tested for presence.
///
/// Fails when the query holds more than [`MAX_QUERY_ITEMS`] non-empty items.
pub fn parse_query(query: Option<String>) -> Result<QueryMap, CustomError> {
    let mut queries: QueryMap = HashMap::new();
    let raw_query = match query {
        None => { return Ok(queries); }
        Some(result) => { result }
    };

    for (index, query_item) in raw_query.split('&').filter(|item| !item.is_empty()).enumerate() {
        if index >= MAX_QUERY_ITEMS {
            return Err(CustomError::new("Too many query parameters."));
        }
        let mut parts = query_item.splitn(2, '=');
        let key_name_raw = parts.next().unwrap_or_default();
        let key_name = percent_encoding::percent_decode_str(key_name_raw).decode_utf8_lossy().to_lowercase();
        if key_name.is_empty() {
            continue;
        }
        let values = queries.entry(key_name).or_default();
        if let Some(value_data_raw) = parts.next() {
            values.push(percent_encoding::percent_decode_str(value_data_raw).collect::<Vec<u8>>());
        }
    }

    Ok(queries)
}

pub fn parse_log_level(log_level: &str) -> Option<log::LevelFilter>
{
    match log_level {
        "off" => Some(log::LevelFilter::Off),
        "trace" => Some(log::LevelFilter::Trace),
        "debug" => Some(log::LevelFilter::Debug),
        "info" => Some(log::LevelFilter::Info),
        "warn" => Some(log::LevelFilter::Warn),
        "error" => Some(log::LevelFilter::Error),
        _ => None
    }
}

pub fn setup_logging(config: &Configuration) -> Result<(), CustomError>
{
    let level = parse_log_level(config.log_level.as_str())
        .ok_or_else(|| CustomError::new(&format!("Unknown log level encountered: '{}'", config.log_level)))?;

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
        .map_err(|_| CustomError::new("Failed to initialize logging."))?;

    info!("logging initialized.");
    Ok(())
}

/// Returns `true` when shutdown was signalled before `timeout` elapsed.
pub async fn shutdown_waiting(timeout: Duration, shutdown_handler: Shutdown) -> bool
{
    tokio::time::timeout(timeout, shutdown_handler.handle()).await.is_ok()
}
