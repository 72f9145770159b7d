use crate::modules::episodes::adapters::outbound::repository::{LoadEpisodePort, SaveEpisodePort};
use crate::modules::episodes::core::episode::Episode;
use crate::shared::core::errors::RepositoryError;
use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};

const EXISTS_BY_TITLE: &str = "SELECT EXISTS(SELECT 1 FROM episode WHERE title = $1)";
const INSERT_EPISODE: &str = "INSERT INTO episode (id, show_id, title) VALUES ($1, $2, $3)";
const INSERT_SHOW_EPISODE: &str = "INSERT INTO show_episodes (show_id, episode_id) VALUES ($1, $2)";
const SELECT_EPISODE: &str = "SELECT id, show_id, title FROM episode WHERE id = $1";

#[derive(Debug, sqlx::FromRow)]
struct EpisodeRow {
    id: String,
    show_id: String,
    title: String,
}

impl From<EpisodeRow> for Episode {
    fn from(row: EpisodeRow) -> Self {
        Episode::new(row.id, row.show_id, row.title)
    }
}

#[derive(Clone)]
pub struct PostgresEpisodeRepository {
    pool: PgPool,
}

impl PostgresEpisodeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

async fn insert_rows(connection: &mut PgConnection, episode: &Episode) -> Result<(), sqlx::Error> {
    sqlx::query(INSERT_EPISODE)
        .bind(&episode.id)
        .bind(&episode.show_id)
        .bind(&episode.title)
        .execute(&mut *connection)
        .await?;
    sqlx::query(INSERT_SHOW_EPISODE)
        .bind(&episode.show_id)
        .bind(&episode.id)
        .execute(&mut *connection)
        .await?;
    Ok(())
}

#[async_trait]
impl SaveEpisodePort for PostgresEpisodeRepository {
    async fn exists_by_title(&self, title: &str) -> bool {
        match sqlx::query_scalar::<_, bool>(EXISTS_BY_TITLE)
            .bind(title)
            .fetch_one(&self.pool)
            .await
        {
            Ok(exists) => exists,
            Err(error) => {
                tracing::warn!(%error, title, "episode existence check failed");
                false
            }
        }
    }

    async fn save_episode(&self, episode: &Episode) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;
        if let Err(error) = insert_rows(&mut tx, episode).await {
            tx.rollback().await?;
            return Err(error.into());
        }
        tx.commit().await?;
        Ok(())
    }
}

#[async_trait]
impl LoadEpisodePort for PostgresEpisodeRepository {
    async fn get_episode_or_none(&self, id: &str) -> Result<Option<Episode>, RepositoryError> {
        let row = sqlx::query_as::<_, EpisodeRow>(SELECT_EPISODE)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Episode::from))
    }
}
