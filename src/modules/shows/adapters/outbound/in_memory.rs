use crate::modules::shows::adapters::outbound::repository::{LoadShowPort, SaveShowPort};
use crate::modules::shows::core::projection::{ShowJoinRow, fold_show_rows};
use crate::modules::shows::core::show::Show;
use crate::shared::core::errors::RepositoryError;
use crate::shared::infrastructure::in_memory::{InMemoryDatabase, JunctionRecord, ShowRecord, Tables};
use async_trait::async_trait;

#[async_trait]
impl SaveShowPort for InMemoryDatabase {
    async fn exists_by_title_or_slug(&self, title: &str, slug: &str) -> bool {
        let result = self
            .read(|tables| {
                tables
                    .shows
                    .iter()
                    .any(|show| show.title == title || show.slug == slug)
            })
            .await;
        match result {
            Ok(exists) => exists,
            Err(error) => {
                tracing::warn!(%error, title, slug, "show existence check failed");
                false
            }
        }
    }

    async fn save_show(&self, show: &Show) -> Result<(), RepositoryError> {
        self.record_save();
        let record = ShowRecord {
            id: show.id.clone(),
            title: show.title.clone(),
            slug: show.slug.clone(),
        };
        self.transaction(|transaction| transaction.insert_show(record))
            .await
    }
}

#[async_trait]
impl LoadShowPort for InMemoryDatabase {
    async fn get_show_or_none(&self, id: &str) -> Result<Option<Show>, RepositoryError> {
        self.record_show_lookup();
        let rows = self.read(|tables| left_join_show(tables, id)).await?;
        Ok(fold_show_rows(rows))
    }
}

/// Same rows the SQL left join produces, one per (episode, distribution) pair.
fn left_join_show(tables: &Tables, id: &str) -> Vec<ShowJoinRow> {
    let Some(show) = tables.shows.iter().find(|show| show.id == id) else {
        return Vec::new();
    };
    let children = |junctions: &[JunctionRecord]| {
        let ids: Vec<Option<String>> = junctions
            .iter()
            .filter(|junction| junction.show_id == id)
            .map(|junction| Some(junction.child_id.clone()))
            .collect();
        if ids.is_empty() { vec![None] } else { ids }
    };
    let episode_ids = children(&tables.show_episodes);
    let distribution_ids = children(&tables.show_distributions);

    let mut rows = Vec::with_capacity(episode_ids.len() * distribution_ids.len());
    for episode_id in &episode_ids {
        for distribution_id in &distribution_ids {
            rows.push(ShowJoinRow {
                show_id: show.id.clone(),
                title: show.title.clone(),
                slug: show.slug.clone(),
                episode_id: episode_id.clone(),
                distribution_id: distribution_id.clone(),
            });
        }
    }
    rows
}
