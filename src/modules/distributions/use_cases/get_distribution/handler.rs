use crate::modules::distributions::adapters::outbound::repository::LoadDistributionPort;
use crate::modules::distributions::core::distribution::Distribution;
use crate::modules::distributions::use_cases::get_distribution::port::GetDistributionUseCase;
use crate::modules::distributions::use_cases::get_distribution::query::GetDistribution;
use crate::modules::shows::adapters::outbound::repository::LoadShowPort;
use crate::shared::core::errors::{ApplicationError, DomainError};
use async_trait::async_trait;
use std::sync::Arc;

pub struct GetDistributionHandler<TDistributions, TShows>
where
    TDistributions: LoadDistributionPort + 'static,
    TShows: LoadShowPort + 'static,
{
    distributions: Arc<TDistributions>,
    shows: Arc<TShows>,
}

impl<TDistributions, TShows> GetDistributionHandler<TDistributions, TShows>
where
    TDistributions: LoadDistributionPort + 'static,
    TShows: LoadShowPort + 'static,
{
    pub fn new(distributions: Arc<TDistributions>, shows: Arc<TShows>) -> Self {
        Self {
            distributions,
            shows,
        }
    }

    pub async fn handle(&self, query: GetDistribution) -> Result<Distribution, ApplicationError> {
        let GetDistribution {
            distribution_id,
            show_id,
        } = query;
        tracing::debug!(%distribution_id, %show_id, "loading distribution");

        if self.shows.get_show_or_none(&show_id).await?.is_none() {
            return Err(DomainError::show_not_found(&show_id).into());
        }

        self.distributions
            .get_distribution_or_none(&distribution_id)
            .await?
            .ok_or_else(|| DomainError::distribution_not_found(&distribution_id).into())
    }
}

#[async_trait]
impl<TDistributions, TShows> GetDistributionUseCase for GetDistributionHandler<TDistributions, TShows>
where
    TDistributions: LoadDistributionPort + 'static,
    TShows: LoadShowPort + 'static,
{
    async fn get_distribution(
        &self,
        query: GetDistribution,
    ) -> Result<Distribution, ApplicationError> {
        self.handle(query).await
    }
}
