/// A distribution channel of a show, e.g. a feed published under its own slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    pub id: String,
    pub show_id: String,
    pub title: String,
    pub slug: String,
}

impl Distribution {
    pub fn new(
        id: impl Into<String>,
        show_id: impl Into<String>,
        title: impl Into<String>,
        slug: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            show_id: show_id.into(),
            title: title.into(),
            slug: slug.into(),
        }
    }
}
