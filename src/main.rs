use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use futures_util::future::try_join_all;
use log::{error, info};
use sentry::ClientInitGuard;
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use swarm_tracker::common::common::setup_logging;
use swarm_tracker::config::structs::configuration::Configuration;
use swarm_tracker::http::http::http_service;
use swarm_tracker::http::structs::http_service_data::HttpServiceData;
use swarm_tracker::stats::enums::stats_event::StatsEvent;
use swarm_tracker::structs::Cli;
use swarm_tracker::tracker::structs::torrent_tracker::TorrentTracker;

#[tracing::instrument(level = "debug")]
fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let mut config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };

    if let Some(bind) = &args.bind {
        if bind.parse::<SocketAddr>().is_err() {
            eprintln!("Error: Invalid ip:port \"{bind}\".");
            exit(1);
        }
        match config.http_server.first_mut() {
            Some(http_server) => {
                http_server.enabled = true;
                http_server.bind_address = bind.clone();
            }
            None => {
                config.http_server.push(Default::default());
                config.http_server[0].bind_address = bind.clone();
            }
        }
    }
    let config = Arc::new(config);

    if let Err(error) = setup_logging(&config) {
        eprintln!("{error}");
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    #[warn(unused_variables)]
    let _sentry_guard: ClientInitGuard;
    if config.sentry_config.enabled {
        _sentry_guard = sentry::init((config.sentry_config.dsn.clone(), sentry::ClientOptions {
            release: sentry::release_name!(),
            debug: config.sentry_config.debug,
            sample_rate: config.sentry_config.sample_rate,
            traces_sample_rate: config.sentry_config.traces_sample_rate,
            ..Default::default()
        }));
    }

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let tracker = Arc::new(TorrentTracker::new(config.clone()));
            let tokio_shutdown = Shutdown::new()
                .map_err(|error| std::io::Error::other(format!("{error:?}")))?;

            let mut http_handles = Vec::new();
            let mut http_futures = Vec::new();
            for http_server_object in &config.http_server {
                if !http_server_object.enabled {
                    continue;
                }
                let address: SocketAddr = match http_server_object.bind_address.parse() {
                    Ok(address) => address,
                    Err(_) => {
                        error!("[HTTP] Invalid bind address {}", http_server_object.bind_address);
                        exit(1);
                    }
                };
                let data = Arc::new(HttpServiceData {
                    torrent_tracker: tracker.clone(),
                    http_trackers_config: Arc::new(http_server_object.clone()),
                });
                match http_service(address, data).await {
                    Ok((handle, future)) => {
                        http_handles.push(handle);
                        http_futures.push(future);
                    }
                    Err(error) => {
                        error!("[HTTP] Unable to bind {address}: {error}");
                        sentry::capture_error(&error);
                        exit(1);
                    }
                }
            }

            if !http_futures.is_empty() {
                tokio::spawn(async move {
                    if let Err(error) = try_join_all(http_futures).await {
                        error!("[HTTP] Server error: {error}");
                    }
                });
            }

            let stats_handler = tokio_shutdown.clone();
            let tracker_spawn_stats = tracker.clone();
            let console_interval = tracker_spawn_stats.config.log_console_interval;
            info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");
            tokio::spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(console_interval.max(1)));
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            tracker_spawn_stats.set_stats(StatsEvent::TimestampConsole, chrono::Utc::now().timestamp());
                            let stats = tracker_spawn_stats.get_stats();
                            info!(
                                "[STATS] Torrents: {} - Seeds: {} - Peers: {} - Evicted: {}",
                                stats.torrents, stats.seeds, stats.peers, stats.peers_evicted
                            );
                            info!(
                                "[STATS TCP] IPv4: Conn:{} A:{} F:{} 404:{} | IPv6: Conn:{} A:{} F:{} 404:{}",
                                stats.tcp4_connections_handled, stats.tcp4_announces_handled, stats.tcp4_failure, stats.tcp4_not_found,
                                stats.tcp6_connections_handled, stats.tcp6_announces_handled, stats.tcp6_failure, stats.tcp6_not_found
                            );
                        }
                        _ = stats_handler.handle() => {
                            info!("[BOOT] Shutting down thread for console updates...");
                            return;
                        }
                    }
                }
            });

            let tracker_cleanup_clone = tracker.clone();
            let cleanup_handler = tokio_shutdown.clone();
            let cleanup_interval = tracker_cleanup_clone.config.tracker_config.peers_cleanup_interval;
            info!("[BOOT] Starting thread for peers cleanup with {cleanup_interval} seconds delay...");
            let torrents_sharding = tracker_cleanup_clone.torrents_sharding.clone();
            tokio::spawn(async move {
                torrents_sharding.cleanup_thread(tracker_cleanup_clone, cleanup_handler).await;
            });

            if let Err(error) = tokio::signal::ctrl_c().await {
                error!("Unable to listen for the shutdown signal: {error}");
            }
            info!("Shutdown request received, shutting down...");
            for handle in http_handles {
                handle.stop(true).await;
            }
            tokio_shutdown.handle().await;
            info!("Server shutting down completed");
            Ok::<(), std::io::Error>(())
        })
}
