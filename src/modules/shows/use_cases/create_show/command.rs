#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateShow {
    pub title: String,
    pub slug: String,
}
