use serde::Serialize;

#[derive(Serialize, PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
pub enum PeerState {
    /// Announced without `started`, `completed` or `left=0`; counted in neither total.
    #[default]
    Unknown,
    Leeching,
    Seeding
}
