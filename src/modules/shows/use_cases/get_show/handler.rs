use crate::modules::shows::adapters::outbound::repository::LoadShowPort;
use crate::modules::shows::core::show::Show;
use crate::modules::shows::use_cases::get_show::port::GetShowUseCase;
use crate::modules::shows::use_cases::get_show::query::GetShow;
use crate::shared::core::errors::{ApplicationError, DomainError};
use async_trait::async_trait;
use std::sync::Arc;

pub struct GetShowHandler<TShows>
where
    TShows: LoadShowPort + 'static,
{
    shows: Arc<TShows>,
}

impl<TShows> GetShowHandler<TShows>
where
    TShows: LoadShowPort + 'static,
{
    pub fn new(shows: Arc<TShows>) -> Self {
        Self { shows }
    }

    pub async fn handle(&self, query: GetShow) -> Result<Show, ApplicationError> {
        tracing::debug!(show_id = %query.show_id, "loading show");
        match self.shows.get_show_or_none(&query.show_id).await? {
            Some(show) => Ok(show),
            None => Err(DomainError::show_not_found(&query.show_id).into()),
        }
    }
}

#[async_trait]
impl<TShows> GetShowUseCase for GetShowHandler<TShows>
where
    TShows: LoadShowPort + 'static,
{
    async fn get_show(&self, query: GetShow) -> Result<Show, ApplicationError> {
        self.handle(query).await
    }
}
