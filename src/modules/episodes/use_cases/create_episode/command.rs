#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEpisode {
    pub show_id: String,
    pub title: String,
}
