/// A show with the ids of its episodes and distributions.
///
/// The child ids are never stored on the show row itself; they are gathered
/// from the junction tables when a show is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Show {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub episodes: Vec<String>,
    pub distributions: Vec<String>,
}

impl Show {
    pub fn new(id: impl Into<String>, title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            slug: slug.into(),
            episodes: Vec::new(),
            distributions: Vec::new(),
        }
    }
}
