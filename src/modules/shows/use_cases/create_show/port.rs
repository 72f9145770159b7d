use crate::modules::shows::core::show::Show;
use crate::modules::shows::use_cases::create_show::command::CreateShow;
use crate::shared::core::errors::ApplicationError;
use async_trait::async_trait;

#[async_trait]
pub trait CreateShowUseCase: Send + Sync {
    async fn create_show(&self, command: CreateShow) -> Result<Show, ApplicationError>;
}
