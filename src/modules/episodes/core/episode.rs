#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Episode {
    pub id: String,
    pub show_id: String,
    pub title: String,
}

impl Episode {
    pub fn new(id: impl Into<String>, show_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            show_id: show_id.into(),
            title: title.into(),
        }
    }
}
