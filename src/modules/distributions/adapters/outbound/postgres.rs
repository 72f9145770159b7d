use crate::modules::distributions::adapters::outbound::repository::{
    LoadDistributionPort, SaveDistributionPort,
};
use crate::modules::distributions::core::distribution::Distribution;
use crate::shared::core::errors::RepositoryError;
use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};

const EXISTS_BY_TITLE_OR_SLUG: &str =
    "SELECT EXISTS(SELECT 1 FROM distribution WHERE title = $1 OR slug = $2)";
const INSERT_DISTRIBUTION: &str =
    "INSERT INTO distribution (id, show_id, title, slug) VALUES ($1, $2, $3, $4)";
const INSERT_SHOW_DISTRIBUTION: &str =
    "INSERT INTO show_distributions (show_id, distribution_id) VALUES ($1, $2)";
const SELECT_DISTRIBUTION: &str =
    "SELECT id, show_id, title, slug FROM distribution WHERE id = $1";

#[derive(Debug, sqlx::FromRow)]
struct DistributionRow {
    id: String,
    show_id: String,
    title: String,
    slug: String,
}

impl From<DistributionRow> for Distribution {
    fn from(row: DistributionRow) -> Self {
        Distribution::new(row.id, row.show_id, row.title, row.slug)
    }
}

#[derive(Clone)]
pub struct PostgresDistributionRepository {
    pool: PgPool,
}

impl PostgresDistributionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

async fn insert_rows(
    connection: &mut PgConnection,
    distribution: &Distribution,
) -> Result<(), sqlx::Error> {
    sqlx::query(INSERT_DISTRIBUTION)
        .bind(&distribution.id)
        .bind(&distribution.show_id)
        .bind(&distribution.title)
        .bind(&distribution.slug)
        .execute(&mut *connection)
        .await?;
    sqlx::query(INSERT_SHOW_DISTRIBUTION)
        .bind(&distribution.show_id)
        .bind(&distribution.id)
        .execute(&mut *connection)
        .await?;
    Ok(())
}

#[async_trait]
impl SaveDistributionPort for PostgresDistributionRepository {
    async fn exists_by_title_or_slug(&self, title: &str, slug: &str) -> bool {
        match sqlx::query_scalar::<_, bool>(EXISTS_BY_TITLE_OR_SLUG)
            .bind(title)
            .bind(slug)
            .fetch_one(&self.pool)
            .await
        {
            Ok(exists) => exists,
            Err(error) => {
                tracing::warn!(%error, title, slug, "distribution existence check failed");
                false
            }
        }
    }

    async fn save_distribution(&self, distribution: &Distribution) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;
        if let Err(error) = insert_rows(&mut tx, distribution).await {
            tx.rollback().await?;
            return Err(error.into());
        }
        tx.commit().await?;
        Ok(())
    }
}

#[async_trait]
impl LoadDistributionPort for PostgresDistributionRepository {
    async fn get_distribution_or_none(
        &self,
        id: &str,
    ) -> Result<Option<Distribution>, RepositoryError> {
        let row = sqlx::query_as::<_, DistributionRow>(SELECT_DISTRIBUTION)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Distribution::from))
    }
}
