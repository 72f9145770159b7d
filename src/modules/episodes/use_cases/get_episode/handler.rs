use crate::modules::episodes::adapters::outbound::repository::LoadEpisodePort;
use crate::modules::episodes::core::episode::Episode;
use crate::modules::episodes::use_cases::get_episode::port::GetEpisodeUseCase;
use crate::modules::episodes::use_cases::get_episode::query::GetEpisode;
use crate::modules::shows::adapters::outbound::repository::LoadShowPort;
use crate::shared::core::errors::{ApplicationError, DomainError};
use async_trait::async_trait;
use std::sync::Arc;

pub struct GetEpisodeHandler<TEpisodes, TShows>
where
    TEpisodes: LoadEpisodePort + 'static,
    TShows: LoadShowPort + 'static,
{
    episodes: Arc<TEpisodes>,
    shows: Arc<TShows>,
}

impl<TEpisodes, TShows> GetEpisodeHandler<TEpisodes, TShows>
where
    TEpisodes: LoadEpisodePort + 'static,
    TShows: LoadShowPort + 'static,
{
    pub fn new(episodes: Arc<TEpisodes>, shows: Arc<TShows>) -> Self {
        Self { episodes, shows }
    }

    // The episode is not required to belong to the requested show.
    pub async fn handle(&self, query: GetEpisode) -> Result<Episode, ApplicationError> {
        let GetEpisode {
            episode_id,
            show_id,
        } = query;
        tracing::debug!(%episode_id, %show_id, "loading episode");

        if self.shows.get_show_or_none(&show_id).await?.is_none() {
            return Err(DomainError::show_not_found(&show_id).into());
        }

        match self.episodes.get_episode_or_none(&episode_id).await? {
            Some(episode) => Ok(episode),
            None => Err(DomainError::episode_not_found(&episode_id).into()),
        }
    }
}

#[async_trait]
impl<TEpisodes, TShows> GetEpisodeUseCase for GetEpisodeHandler<TEpisodes, TShows>
where
    TEpisodes: LoadEpisodePort + 'static,
    TShows: LoadShowPort + 'static,
{
    async fn get_episode(&self, query: GetEpisode) -> Result<Episode, ApplicationError> {
        self.handle(query).await
    }
}
