use crate::modules::distributions::core::distribution::Distribution;
use crate::modules::distributions::use_cases::get_distribution::query::GetDistribution;
use crate::shared::core::errors::ApplicationError;
use async_trait::async_trait;

#[async_trait]
pub trait GetDistributionUseCase: Send + Sync {
    async fn get_distribution(
        &self,
        query: GetDistribution,
    ) -> Result<Distribution, ApplicationError>;
}
