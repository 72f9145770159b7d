use crate::modules::shows::core::show::Show;
use crate::shared::core::errors::RepositoryError;
use async_trait::async_trait;

#[async_trait]
pub trait SaveShowPort: Send + Sync {
    /// True when a show already uses `title` or `slug`. A failed query also reads as false.
    async fn exists_by_title_or_slug(&self, title: &str, slug: &str) -> bool;
    async fn save_show(&self, show: &Show) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait LoadShowPort: Send + Sync {
    async fn get_show_or_none(&self, id: &str) -> Result<Option<Show>, RepositoryError>;
}
