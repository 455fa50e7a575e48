#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
pub enum AnnounceEvent {
    #[default]
    None,
    Started,
    Stopped,
    Completed
}
