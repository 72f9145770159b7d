use crate::modules::shows::core::show::Show;
use crate::modules::shows::use_cases::get_show::query::GetShow;
use crate::shared::core::errors::ApplicationError;
use async_trait::async_trait;

#[async_trait]
pub trait GetShowUseCase: Send + Sync {
    async fn get_show(&self, query: GetShow) -> Result<Show, ApplicationError>;
}
