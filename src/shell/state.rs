use crate::modules::distributions::adapters::outbound::postgres::PostgresDistributionRepository;
use crate::modules::distributions::adapters::outbound::repository::{
    LoadDistributionPort, SaveDistributionPort,
};
use crate::modules::distributions::use_cases::create_distribution::handler::CreateDistributionHandler;
use crate::modules::distributions::use_cases::create_distribution::port::CreateDistributionUseCase;
use crate::modules::distributions::use_cases::get_distribution::handler::GetDistributionHandler;
use crate::modules::distributions::use_cases::get_distribution::port::GetDistributionUseCase;
use crate::modules::episodes::adapters::outbound::postgres::PostgresEpisodeRepository;
use crate::modules::episodes::adapters::outbound::repository::{LoadEpisodePort, SaveEpisodePort};
use crate::modules::episodes::use_cases::create_episode::handler::CreateEpisodeHandler;
use crate::modules::episodes::use_cases::create_episode::port::CreateEpisodeUseCase;
use crate::modules::episodes::use_cases::get_episode::handler::GetEpisodeHandler;
use crate::modules::episodes::use_cases::get_episode::port::GetEpisodeUseCase;
use crate::modules::shows::adapters::outbound::postgres::PostgresShowRepository;
use crate::modules::shows::adapters::outbound::repository::{LoadShowPort, SaveShowPort};
use crate::modules::shows::use_cases::create_show::handler::CreateShowHandler;
use crate::modules::shows::use_cases::create_show::port::CreateShowUseCase;
use crate::modules::shows::use_cases::get_show::handler::GetShowHandler;
use crate::modules::shows::use_cases::get_show::port::GetShowUseCase;
use crate::shared::core::identity::{IdGenerator, UuidGenerator};
use crate::shared::infrastructure::in_memory::InMemoryDatabase;
use sqlx::PgPool;
use std::sync::Arc;

/// One entry per use case, shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub create_show: Arc<dyn CreateShowUseCase>,
    pub get_show: Arc<dyn GetShowUseCase>,
    pub create_episode: Arc<dyn CreateEpisodeUseCase>,
    pub get_episode: Arc<dyn GetEpisodeUseCase>,
    pub create_distribution: Arc<dyn CreateDistributionUseCase>,
    pub get_distribution: Arc<dyn GetDistributionUseCase>,
}

impl AppState {
    pub fn new<TShows, TEpisodes, TDistributions, TIds>(
        shows: Arc<TShows>,
        episodes: Arc<TEpisodes>,
        distributions: Arc<TDistributions>,
        ids: Arc<TIds>,
    ) -> Self
    where
        TShows: SaveShowPort + LoadShowPort + 'static,
        TEpisodes: SaveEpisodePort + LoadEpisodePort + 'static,
        TDistributions: SaveDistributionPort + LoadDistributionPort + 'static,
        TIds: IdGenerator + 'static,
    {
        Self {
            create_show: Arc::new(CreateShowHandler::new(shows.clone(), ids.clone())),
            get_show: Arc::new(GetShowHandler::new(shows.clone())),
            create_episode: Arc::new(CreateEpisodeHandler::new(
                episodes.clone(),
                shows.clone(),
                ids.clone(),
            )),
            get_episode: Arc::new(GetEpisodeHandler::new(episodes, shows.clone())),
            create_distribution: Arc::new(CreateDistributionHandler::new(
                distributions.clone(),
                shows.clone(),
                ids,
            )),
            get_distribution: Arc::new(GetDistributionHandler::new(distributions, shows)),
        }
    }

    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(PostgresShowRepository::new(pool.clone())),
            Arc::new(PostgresEpisodeRepository::new(pool.clone())),
            Arc::new(PostgresDistributionRepository::new(pool)),
            Arc::new(UuidGenerator),
        )
    }

    pub fn in_memory<TIds>(database: Arc<InMemoryDatabase>, ids: Arc<TIds>) -> Self
    where
        TIds: IdGenerator + 'static,
    {
        Self::new(database.clone(), database.clone(), database, ids)
    }
}
