use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;

impl AnnounceQueryRequest {
    /// The address other peers should connect to.
    pub fn peer_address(&self) -> String {
        match &self.ip {
            Some(ip) => ip.clone(),
            None => self.remote_addr.to_canonical().to_string()
        }
    }
}
