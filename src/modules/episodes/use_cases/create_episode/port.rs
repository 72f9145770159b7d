use crate::modules::episodes::core::episode::Episode;
use crate::modules::episodes::use_cases::create_episode::command::CreateEpisode;
use crate::shared::core::errors::ApplicationError;
use async_trait::async_trait;

#[async_trait]
pub trait CreateEpisodeUseCase: Send + Sync {
    async fn create_episode(&self, command: CreateEpisode) -> Result<Episode, ApplicationError>;
}
