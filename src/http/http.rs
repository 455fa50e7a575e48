use std::future::Future;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::{App, http, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::ServerHandle;
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use log::{debug, info};
use crate::bencode::enums::bencode_value::BencodeValue;
use crate::common::common::parse_query;
use crate::common::structs::custom_error::CustomError;
use crate::http::structs::http_service_data::HttpServiceData;
use crate::http::types::{HttpServiceQueryHashingMapErr, HttpServiceQueryHashingMapOk};
use crate::stats::enums::stats_event::StatsEvent;
use crate::tracker::enums::announce_error::AnnounceError;
use crate::tracker::structs::torrent_tracker::TorrentTracker;
use crate::{ben_bytes, ben_map};

pub fn http_service_cors() -> Cors
{
    Cors::default()
        .send_wildcard()
        .allowed_methods(vec!["GET"])
        .allowed_headers(vec![http::header::X_FORWARDED_FOR, http::header::ACCEPT])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

/// Paths answering announces: the configured path with and without a trailing slash.
pub fn http_service_announce_paths(announce_path: &str) -> Vec<String>
{
    let base = announce_path.trim_end_matches('/');
    if base.is_empty() {
        return vec![String::from("/")];
    }
    vec![base.to_string(), format!("{base}/")]
}

pub fn http_service_routes(data: Arc<HttpServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.service(web::resource(http_service_announce_paths(&data.http_trackers_config.announce_path))
            .route(web::get().to(http_service_announce))
            .default_service(web::route().to(http_service_not_found)));
        cfg.default_service(web::route().to(http_service_not_found));
    })
}

pub async fn http_service(
    addr: SocketAddr,
    data: Arc<HttpServiceData>
) -> Result<(ServerHandle, impl Future<Output=Result<(), std::io::Error>>), std::io::Error>
{
    let http_config = data.http_trackers_config.clone();
    info!("[HTTP] Starting server listener on {addr}");
    let server = HttpServer::new(move || {
        App::new()
            .wrap(http_service_cors())
            .configure(http_service_routes(data.clone()))
    })
        .keep_alive(Duration::from_secs(http_config.keep_alive))
        .client_request_timeout(Duration::from_secs(http_config.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(http_config.disconnect_timeout))
        .workers(http_config.threads.max(1) as usize)
        .bind((addr.ip(), addr.port()))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

pub async fn http_service_announce(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let ip = match http_validate_ip(&request, &data) {
        Ok(ip) => ip,
        Err(result) => { return result; }
    };
    let tracker = &data.torrent_tracker;

    let query_map_result = parse_query(Some(request.query_string().to_string()));
    let query_map = match http_service_query_hashing(query_map_result) {
        Ok(result) => { result }
        Err(err) => {
            http_service_failure_stats(ip, tracker);
            return err;
        }
    };

    match tracker.validate_announce(ip, &query_map) {
        Ok(announce) => {
            if ip.is_ipv4() {
                tracker.update_stats(StatsEvent::Tcp4AnnouncesHandled, 1);
            } else {
                tracker.update_stats(StatsEvent::Tcp6AnnouncesHandled, 1);
            }
            http_service_bencode(tracker.handle_announce(&announce))
        }
        Err(error) => http_service_failure(tracker, ip, error)
    }
}

pub async fn http_service_not_found(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let ip = match http_validate_ip(&request, &data) {
        Ok(ip) => ip,
        Err(result) => { return result; }
    };

    if request.method() != http::Method::GET {
        debug!("[HTTP] Request from {ip}: {} is not allowed", request.method());
        return http_service_failure(&data.torrent_tracker, ip, AnnounceError::InvalidRequestType);
    }

    debug!("[HTTP] Request from {ip}: {} not found", request.path());
    if ip.is_ipv4() {
        data.torrent_tracker.update_stats(StatsEvent::Tcp4NotFound, 1);
    } else {
        data.torrent_tracker.update_stats(StatsEvent::Tcp6NotFound, 1);
    }
    http_service_failure(&data.torrent_tracker, ip, AnnounceError::InvalidUrl)
}

pub fn http_service_bencode(value: BencodeValue) -> HttpResponse
{
    HttpResponse::Ok().content_type(ContentType::plaintext()).body(value.encode())
}

pub fn http_service_failure(tracker: &TorrentTracker, ip: IpAddr, error: AnnounceError) -> HttpResponse
{
    http_service_failure_stats(ip, tracker);
    http_service_bencode(error.to_bencode())
}

pub fn http_service_failure_stats(ip: IpAddr, tracker: &TorrentTracker)
{
    if ip.is_ipv4() {
        tracker.update_stats(StatsEvent::Tcp4Failure, 1);
    } else {
        tracker.update_stats(StatsEvent::Tcp6Failure, 1);
    }
}

pub fn http_service_stats_log(ip: IpAddr, tracker: &TorrentTracker)
{
    if ip.is_ipv4() {
        tracker.update_stats(StatsEvent::Tcp4ConnectionsHandled, 1);
    } else {
        tracker.update_stats(StatsEvent::Tcp6ConnectionsHandled, 1);
    }
}

/// The configured real IP header when it holds an address, otherwise the socket peer.
pub fn http_service_retrieve_remote_ip(request: &HttpRequest, data: &HttpServiceData) -> Option<IpAddr>
{
    let real_ip = &data.http_trackers_config.real_ip;
    if !real_ip.is_empty() {
        let header_ip = request.headers().get(real_ip.as_str())
            .and_then(|header| header.to_str().ok())
            .and_then(|header| IpAddr::from_str(header.trim()).ok());
        if let Some(ip) = header_ip {
            return Some(ip.to_canonical());
        }
    }
    request.peer_addr().map(|addr| addr.ip().to_canonical())
}

pub fn http_validate_ip(request: &HttpRequest, data: &HttpServiceData) -> Result<IpAddr, HttpResponse>
{
    match http_service_retrieve_remote_ip(request, data) {
        Some(ip) => {
            http_service_stats_log(ip, &data.torrent_tracker);
            Ok(ip)
        }
        None => {
            Err(http_service_bencode(ben_map! {
                "failure" => ben_bytes!("Unknown origin IP.")
            }))
        }
    }
}

pub fn http_service_query_hashing(query_map_result: Result<HttpServiceQueryHashingMapOk, CustomError>) -> Result<HttpServiceQueryHashingMapOk, HttpServiceQueryHashingMapErr>
{
    match query_map_result {
        Ok(e) => {
            Ok(e)
        }
        Err(e) => {
            Err(http_service_bencode(ben_map! {
                "failure" => ben_bytes!(e.to_string())
            }))
        }
    }
}
