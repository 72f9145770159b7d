use crate::modules::shows::adapters::outbound::repository::SaveShowPort;
use crate::modules::shows::core::show::Show;
use crate::modules::shows::use_cases::create_show::command::CreateShow;
use crate::modules::shows::use_cases::create_show::port::CreateShowUseCase;
use crate::shared::core::errors::{ApplicationError, DomainError};
use crate::shared::core::identity::IdGenerator;
use async_trait::async_trait;
use std::sync::Arc;

pub struct CreateShowHandler<TShows, TIds>
where
    TShows: SaveShowPort + 'static,
    TIds: IdGenerator + 'static,
{
    shows: Arc<TShows>,
    ids: Arc<TIds>,
}

impl<TShows, TIds> CreateShowHandler<TShows, TIds>
where
    TShows: SaveShowPort + 'static,
    TIds: IdGenerator + 'static,
{
    pub fn new(shows: Arc<TShows>, ids: Arc<TIds>) -> Self {
        Self { shows, ids }
    }

    pub async fn handle(&self, command: CreateShow) -> Result<Show, ApplicationError> {
        let CreateShow { title, slug } = command;

        if self.shows.exists_by_title_or_slug(&title, &slug).await {
            tracing::warn!(%title, %slug, "rejected duplicate show");
            return Err(DomainError::show_already_exists(&title).into());
        }

        let show = Show::new(self.ids.new_id(), title, slug);
        self.shows.save_show(&show).await?;
        tracing::info!(show_id = %show.id, "show created");
        Ok(show)
    }
}

#[async_trait]
impl<TShows, TIds> CreateShowUseCase for CreateShowHandler<TShows, TIds>
where
    TShows: SaveShowPort + 'static,
    TIds: IdGenerator + 'static,
{
    async fn create_show(&self, command: CreateShow) -> Result<Show, ApplicationError> {
        self.handle(command).await
    }
}
