use crate::modules::episodes::adapters::outbound::repository::SaveEpisodePort;
use crate::modules::episodes::core::episode::Episode;
use crate::modules::episodes::use_cases::create_episode::command::CreateEpisode;
use crate::modules::episodes::use_cases::create_episode::port::CreateEpisodeUseCase;
use crate::modules::shows::adapters::outbound::repository::LoadShowPort;
use crate::shared::core::errors::{ApplicationError, DomainError};
use crate::shared::core::identity::IdGenerator;
use async_trait::async_trait;
use std::sync::Arc;

pub struct CreateEpisodeHandler<TEpisodes, TShows, TIds>
where
    TEpisodes: SaveEpisodePort + 'static,
    TShows: LoadShowPort + 'static,
    TIds: IdGenerator + 'static,
{
    episodes: Arc<TEpisodes>,
    shows: Arc<TShows>,
    ids: Arc<TIds>,
}

impl<TEpisodes, TShows, TIds> CreateEpisodeHandler<TEpisodes, TShows, TIds>
where
    TEpisodes: SaveEpisodePort + 'static,
    TShows: LoadShowPort + 'static,
    TIds: IdGenerator + 'static,
{
    pub fn new(episodes: Arc<TEpisodes>, shows: Arc<TShows>, ids: Arc<TIds>) -> Self {
        Self {
            episodes,
            shows,
            ids,
        }
    }

    /// Title uniqueness is checked before the show lookup; neither failure writes anything.
    pub async fn handle(&self, command: CreateEpisode) -> Result<Episode, ApplicationError> {
        let CreateEpisode { show_id, title } = command;

        if self.episodes.exists_by_title(&title).await {
            tracing::warn!(%title, "rejected duplicate episode");
            return Err(DomainError::episode_already_exists(&title).into());
        }

        if self.shows.get_show_or_none(&show_id).await?.is_none() {
            tracing::warn!(%show_id, "rejected episode for unknown show");
            return Err(DomainError::show_not_found(&show_id).into());
        }

        let episode = Episode::new(self.ids.new_id(), show_id, title);
        self.episodes.save_episode(&episode).await?;
        tracing::info!(episode_id = %episode.id, show_id = %episode.show_id, "episode created");
        Ok(episode)
    }
}

#[async_trait]
impl<TEpisodes, TShows, TIds> CreateEpisodeUseCase for CreateEpisodeHandler<TEpisodes, TShows, TIds>
where
    TEpisodes: SaveEpisodePort + 'static,
    TShows: LoadShowPort + 'static,
    TIds: IdGenerator + 'static,
{
    async fn create_episode(&self, command: CreateEpisode) -> Result<Episode, ApplicationError> {
        self.handle(command).await
    }
}
