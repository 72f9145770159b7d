use crate::modules::distributions::core::distribution::Distribution;
use crate::shared::core::errors::RepositoryError;
use async_trait::async_trait;

#[async_trait]
pub trait SaveDistributionPort: Send + Sync {
    async fn exists_by_title_or_slug(&self, title: &str, slug: &str) -> bool;
    async fn save_distribution(&self, distribution: &Distribution) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait LoadDistributionPort: Send + Sync {
    async fn get_distribution_or_none(
        &self,
        id: &str,
    ) -> Result<Option<Distribution>, RepositoryError>;
}
