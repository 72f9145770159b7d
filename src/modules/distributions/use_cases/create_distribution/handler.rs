use crate::modules::distributions::adapters::outbound::repository::SaveDistributionPort;
use crate::modules::distributions::core::distribution::Distribution;
use crate::modules::distributions::use_cases::create_distribution::command::CreateDistribution;
use crate::modules::distributions::use_cases::create_distribution::port::CreateDistributionUseCase;
use crate::modules::shows::adapters::outbound::repository::LoadShowPort;
use crate::shared::core::errors::{ApplicationError, DomainError};
use crate::shared::core::identity::IdGenerator;
use async_trait::async_trait;
use std::sync::Arc;

pub struct CreateDistributionHandler<TDistributions, TShows, TIds>
where
    TDistributions: SaveDistributionPort + 'static,
    TShows: LoadShowPort + 'static,
    TIds: IdGenerator + 'static,
{
    distributions: Arc<TDistributions>,
    shows: Arc<TShows>,
    ids: Arc<TIds>,
}

impl<TDistributions, TShows, TIds> CreateDistributionHandler<TDistributions, TShows, TIds>
where
    TDistributions: SaveDistributionPort + 'static,
    TShows: LoadShowPort + 'static,
    TIds: IdGenerator + 'static,
{
    pub fn new(distributions: Arc<TDistributions>, shows: Arc<TShows>, ids: Arc<TIds>) -> Self {
        Self {
            distributions,
            shows,
            ids,
        }
    }

    pub async fn handle(
        &self,
        command: CreateDistribution,
    ) -> Result<Distribution, ApplicationError> {
        let CreateDistribution {
            show_id,
            title,
            slug,
        } = command;

        if self
            .distributions
            .exists_by_title_or_slug(&title, &slug)
            .await
        {
            tracing::warn!(%title, %slug, "rejected duplicate distribution");
            return Err(DomainError::distribution_already_exists(&title).into());
        }

        if self.shows.get_show_or_none(&show_id).await?.is_none() {
            tracing::warn!(%show_id, "rejected distribution for unknown show");
            return Err(DomainError::show_not_found(&show_id).into());
        }

        let distribution = Distribution::new(self.ids.new_id(), show_id, title, slug);
        self.distributions.save_distribution(&distribution).await?;
        tracing::info!(
            distribution_id = %distribution.id,
            show_id = %distribution.show_id,
            "distribution created"
        );
        Ok(distribution)
    }
}

#[async_trait]
impl<TDistributions, TShows, TIds> CreateDistributionUseCase
    for CreateDistributionHandler<TDistributions, TShows, TIds>
where
    TDistributions: SaveDistributionPort + 'static,
    TShows: LoadShowPort + 'static,
    TIds: IdGenerator + 'static,
{
    async fn create_distribution(
        &self,
        command: CreateDistribution,
    ) -> Result<Distribution, ApplicationError> {
        self.handle(command).await
    }
}

#[cfg(test)]
mod create_distribution_handler_tests {
    use super::*;
    use crate::modules::distributions::adapters::outbound::repository::LoadDistributionPort;
    use crate::modules::shows::adapters::outbound::repository::SaveShowPort;
    use crate::modules::shows::core::show::Show;
    use crate::shared::core::errors::ErrorCategory;
    use crate::shared::infrastructure::in_memory::InMemoryDatabase;
    use crate::tests::fixtures::commands::CreateDistributionBuilder;
    use crate::tests::fixtures::ids::SequenceIdGenerator;
    use rstest::{fixture, rstest};

    type Handler =
        CreateDistributionHandler<InMemoryDatabase, InMemoryDatabase, SequenceIdGenerator>;
    type BeforeEachReturn = (Arc<InMemoryDatabase>, Handler);

    #[fixture]
    async fn before_each() -> BeforeEachReturn {
        let database = Arc::new(InMemoryDatabase::new());
        database
            .save_show(&Show::new("s-1", "Gopher Talk", "gopher-talk"))
            .await
            .expect("seed failed");
        let handler = CreateDistributionHandler::new(
            database.clone(),
            database.clone(),
            Arc::new(SequenceIdGenerator::new()),
        );
        (database, handler)
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_create_a_distribution_for_an_existing_show(
        #[future] before_each: BeforeEachReturn,
    ) {
        let (database, handler) = before_each.await;

        let distribution = handler
            .handle(CreateDistributionBuilder::new("s-1").build())
            .await
            .expect("handle failed");

        assert_eq!(
            distribution,
            Distribution::new("id-0001", "s-1", "Main feed", "main-feed")
        );
        assert_eq!(
            database.get_distribution_or_none("id-0001").await.unwrap(),
            Some(distribution)
        );
    }

    #[rstest]
    #[case(CreateDistributionBuilder::new("missing").slug("other").build())]
    #[case(CreateDistributionBuilder::new("missing").title("Other").build())]
    #[tokio::test]
    async fn it_should_reject_a_clash_before_looking_up_the_show(
        #[future] before_each: BeforeEachReturn,
        #[case] clashing: CreateDistribution,
    ) {
        let (database, handler) = before_each.await;
        handler
            .handle(CreateDistributionBuilder::new("s-1").build())
            .await
            .unwrap();
        let saves_before = database.save_calls();
        let lookups_before = database.show_lookups();

        let error = handler.handle(clashing.clone()).await.unwrap_err();

        assert_eq!(error.category(), ErrorCategory::AlreadyExists);
        assert_eq!(
            error.to_string(),
            DomainError::distribution_already_exists(&clashing.title).to_string()
        );
        assert_eq!(database.save_calls(), saves_before);
        assert_eq!(database.show_lookups(), lookups_before);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_with_not_found_and_write_nothing_for_a_missing_show(
        #[future] before_each: BeforeEachReturn,
    ) {
        let (database, handler) = before_each.await;
        let saves_before = database.save_calls();

        let error = handler
            .handle(CreateDistributionBuilder::new("missing").build())
            .await
            .unwrap_err();

        assert_eq!(error.category(), ErrorCategory::NotFound);
        assert_eq!(database.save_calls(), saves_before);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_leave_nothing_behind_when_the_junction_insert_fails(
        #[future] before_each: BeforeEachReturn,
    ) {
        let (database, handler) = before_each.await;
        database.toggle_junction_failure();

        let result = handler
            .handle(CreateDistributionBuilder::new("s-1").build())
            .await;

        assert!(result.is_err());
        assert_eq!(
            database.get_distribution_or_none("id-0001").await.unwrap(),
            None
        );
    }
}
