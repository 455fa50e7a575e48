//! Statistics event types for tracking various metrics.

use serde::{Deserialize, Serialize};

/// Enumeration of all trackable statistics events.
///
/// Used with `TorrentTracker::update_stats()` and `TorrentTracker::set_stats()`.
///
/// # Example
///
/// ```rust,ignore
/// use swarm_tracker::stats::enums::stats_event::StatsEvent;
///
/// tracker.update_stats(StatsEvent::Tcp4AnnouncesHandled, 1);
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    Torrents,
    Seeds,
    Peers,
    PeersEvicted,
    TimestampTimeout,
    TimestampConsole,
    Tcp4ConnectionsHandled,
    Tcp4AnnouncesHandled,
    Tcp4NotFound,
    Tcp4Failure,
    Tcp6ConnectionsHandled,
    Tcp6AnnouncesHandled,
    Tcp6NotFound,
    Tcp6Failure,
}
