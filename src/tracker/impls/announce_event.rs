use crate::tracker::enums::announce_event::AnnounceEvent;

impl AnnounceEvent {
    /// Unrecognised values map to [`AnnounceEvent::None`].
    pub fn from_bytes(value: &[u8]) -> AnnounceEvent {
        match value {
            b"started" => AnnounceEvent::Started,
            b"stopped" => AnnounceEvent::Stopped,
            b"completed" => AnnounceEvent::Completed,
            _ => AnnounceEvent::None
        }
    }
}
