use crate::modules::episodes::core::episode::Episode;
use crate::modules::episodes::use_cases::get_episode::query::GetEpisode;
use crate::shared::core::errors::ApplicationError;
use async_trait::async_trait;

#[async_trait]
pub trait GetEpisodeUseCase: Send + Sync {
    async fn get_episode(&self, query: GetEpisode) -> Result<Episode, ApplicationError>;
}
