use crate::modules::distributions::core::distribution::Distribution;
use crate::modules::distributions::use_cases::create_distribution::command::CreateDistribution;
use crate::shared::core::errors::ApplicationError;
use async_trait::async_trait;

#[async_trait]
pub trait CreateDistributionUseCase: Send + Sync {
    async fn create_distribution(
        &self,
        command: CreateDistribution,
    ) -> Result<Distribution, ApplicationError>;
}
