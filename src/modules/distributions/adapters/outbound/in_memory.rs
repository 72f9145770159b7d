use crate::modules::distributions::adapters::outbound::repository::{
    LoadDistributionPort, SaveDistributionPort,
};
use crate::modules::distributions::core::distribution::Distribution;
use crate::shared::core::errors::RepositoryError;
use crate::shared::infrastructure::in_memory::{
    DistributionRecord, InMemoryDatabase, JunctionRecord,
};
use async_trait::async_trait;

#[async_trait]
impl SaveDistributionPort for InMemoryDatabase {
    async fn exists_by_title_or_slug(&self, title: &str, slug: &str) -> bool {
        let result = self
            .read(|tables| {
                tables
                    .distributions
                    .iter()
                    .any(|distribution| distribution.title == title || distribution.slug == slug)
            })
            .await;
        result.unwrap_or_else(|error| {
            tracing::warn!(%error, title, slug, "distribution existence check failed");
            false
        })
    }

    async fn save_distribution(&self, distribution: &Distribution) -> Result<(), RepositoryError> {
        self.record_save();
        let record = DistributionRecord {
            id: distribution.id.clone(),
            show_id: distribution.show_id.clone(),
            title: distribution.title.clone(),
            slug: distribution.slug.clone(),
        };
        let junction = JunctionRecord {
            show_id: distribution.show_id.clone(),
            child_id: distribution.id.clone(),
        };
        self.transaction(|transaction| {
            transaction.insert_distribution(record)?;
            transaction.insert_show_distribution(junction)
        })
        .await
    }
}

#[async_trait]
impl LoadDistributionPort for InMemoryDatabase {
    async fn get_distribution_or_none(
        &self,
        id: &str,
    ) -> Result<Option<Distribution>, RepositoryError> {
        self.read(|tables| {
            tables
                .distributions
                .iter()
                .find(|distribution| distribution.id == id)
                .map(|record| {
                    Distribution::new(&record.id, &record.show_id, &record.title, &record.slug)
                })
        })
        .await
    }
}
