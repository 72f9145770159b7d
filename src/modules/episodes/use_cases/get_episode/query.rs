#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetEpisode {
    pub episode_id: String,
    pub show_id: String,
}
