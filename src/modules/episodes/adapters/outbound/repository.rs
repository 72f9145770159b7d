use crate::modules::episodes::core::episode::Episode;
use crate::shared::core::errors::RepositoryError;
use async_trait::async_trait;

#[async_trait]
pub trait SaveEpisodePort: Send + Sync {
    /// Episode titles are unique across all shows. A failed query reads as false.
    async fn exists_by_title(&self, title: &str) -> bool;
    /// Writes the episode row and its show junction row, or neither.
    async fn save_episode(&self, episode: &Episode) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait LoadEpisodePort: Send + Sync {
    async fn get_episode_or_none(&self, id: &str) -> Result<Option<Episode>, RepositoryError>;
}
