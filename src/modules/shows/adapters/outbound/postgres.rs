use crate::modules::shows::adapters::outbound::repository::{LoadShowPort, SaveShowPort};
use crate::modules::shows::core::projection::{ShowJoinRow, fold_show_rows};
use crate::modules::shows::core::show::Show;
use crate::shared::core::errors::RepositoryError;
use async_trait::async_trait;
use sqlx::PgPool;

const EXISTS_BY_TITLE_OR_SLUG: &str =
    "SELECT EXISTS(SELECT 1 FROM show WHERE title = $1 OR slug = $2)";

const INSERT_SHOW: &str = "INSERT INTO show (id, title, slug) VALUES ($1, $2, $3)";

const SELECT_SHOW_WITH_CHILDREN: &str = r#"
    SELECT s.id, s.title, s.slug, se.episode_id, sd.distribution_id
    FROM show s
    LEFT JOIN show_episodes se ON se.show_id = s.id
    LEFT JOIN show_distributions sd ON sd.show_id = s.id
    WHERE s.id = $1
"#;

#[derive(Debug, sqlx::FromRow)]
struct ShowWithChildrenRow {
    id: String,
    title: String,
    slug: String,
    episode_id: Option<String>,
    distribution_id: Option<String>,
}

impl From<ShowWithChildrenRow> for ShowJoinRow {
    fn from(row: ShowWithChildrenRow) -> Self {
        Self {
            show_id: row.id,
            title: row.title,
            slug: row.slug,
            episode_id: row.episode_id,
            distribution_id: row.distribution_id,
        }
    }
}

#[derive(Clone)]
pub struct PostgresShowRepository {
    pool: PgPool,
}

impl PostgresShowRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SaveShowPort for PostgresShowRepository {
    async fn exists_by_title_or_slug(&self, title: &str, slug: &str) -> bool {
        match sqlx::query_scalar::<_, bool>(EXISTS_BY_TITLE_OR_SLUG)
            .bind(title)
            .bind(slug)
            .fetch_one(&self.pool)
            .await
        {
            Ok(exists) => exists,
            Err(error) => {
                tracing::warn!(%error, title, slug, "show existence check failed");
                false
            }
        }
    }

    async fn save_show(&self, show: &Show) -> Result<(), RepositoryError> {
        sqlx::query(INSERT_SHOW)
            .bind(&show.id)
            .bind(&show.title)
            .bind(&show.slug)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl LoadShowPort for PostgresShowRepository {
    async fn get_show_or_none(&self, id: &str) -> Result<Option<Show>, RepositoryError> {
        let rows = sqlx::query_as::<_, ShowWithChildrenRow>(SELECT_SHOW_WITH_CHILDREN)
            .bind(id)
            .fetch_all(&self.pool)
            .await?;
        Ok(fold_show_rows(rows.into_iter().map(ShowJoinRow::from)))
    }
}
