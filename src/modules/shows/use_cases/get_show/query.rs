#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetShow {
    pub show_id: String,
}
