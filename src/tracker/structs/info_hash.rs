//! BitTorrent info hash identifier.

/// A 20-byte BitTorrent info hash.
///
/// The first byte selects the shard the swarm is stored in.
///
/// # Example
///
/// ```rust
/// use swarm_tracker::tracker::structs::info_hash::InfoHash;
///
/// let hash = InfoHash::try_from(&[0xabu8; 20][..]).unwrap();
/// assert_eq!(hash.to_string(), "ab".repeat(20));
/// assert!(InfoHash::try_from(&b"too short"[..]).is_err());
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct InfoHash(pub [u8; 20]);
