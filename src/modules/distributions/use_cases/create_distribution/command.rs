#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDistribution {
    pub show_id: String,
    pub title: String,
    pub slug: String,
}
