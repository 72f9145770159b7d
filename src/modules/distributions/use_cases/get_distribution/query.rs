#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetDistribution {
    pub distribution_id: String,
    pub show_id: String,
}
