use crate::modules::episodes::adapters::outbound::repository::{LoadEpisodePort, SaveEpisodePort};
use crate::modules::episodes::core::episode::Episode;
use crate::shared::core::errors::RepositoryError;
use crate::shared::infrastructure::in_memory::{EpisodeRecord, InMemoryDatabase, JunctionRecord};
use async_trait::async_trait;

#[async_trait]
impl SaveEpisodePort for InMemoryDatabase {
    async fn exists_by_title(&self, title: &str) -> bool {
        let result = self
            .read(|tables| tables.episodes.iter().any(|episode| episode.title == title))
            .await;
        result.unwrap_or_else(|error| {
            tracing::warn!(%error, title, "episode existence check failed");
            false
        })
    }

    async fn save_episode(&self, episode: &Episode) -> Result<(), RepositoryError> {
        self.record_save();
        let record = EpisodeRecord {
            id: episode.id.clone(),
            show_id: episode.show_id.clone(),
            title: episode.title.clone(),
        };
        let junction = JunctionRecord {
            show_id: episode.show_id.clone(),
            child_id: episode.id.clone(),
        };
        self.transaction(|transaction| {
            transaction.insert_episode(record)?;
            transaction.insert_show_episode(junction)
        })
        .await
    }
}

#[async_trait]
impl LoadEpisodePort for InMemoryDatabase {
    async fn get_episode_or_none(&self, id: &str) -> Result<Option<Episode>, RepositoryError> {
        self.read(|tables| {
            tables
                .episodes
                .iter()
                .find(|episode| episode.id == id)
                .map(|record| Episode::new(&record.id, &record.show_id, &record.title))
        })
        .await
    }
}
