// In memory relational store shared by the show, episode and distribution adapters.
//
// Purpose
// - Exercise the use cases without a database, and back local development.
//
// Responsibilities
// - Hold one table per relation, with the primary key, unique and foreign key
//   rules of the SQL schema.
// - Apply multi-statement writes atomically: statements run against a staged
//   copy that replaces the tables only when every statement succeeded.
// - Count writes and show lookups so tests can assert which calls happened.

use crate::shared::core::errors::RepositoryError;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowRecord {
    pub id: String,
    pub title: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeRecord {
    pub id: String,
    pub show_id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionRecord {
    pub id: String,
    pub show_id: String,
    pub title: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JunctionRecord {
    pub show_id: String,
    pub child_id: String,
}

#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub shows: Vec<ShowRecord>,
    pub episodes: Vec<EpisodeRecord>,
    pub distributions: Vec<DistributionRecord>,
    pub show_episodes: Vec<JunctionRecord>,
    pub show_distributions: Vec<JunctionRecord>,
}

#[derive(Default)]
pub struct InMemoryDatabase {
    tables: RwLock<Tables>,
    is_offline: AtomicBool,
    fail_junction_inserts: AtomicBool,
    save_calls: AtomicUsize,
    show_lookups: AtomicUsize,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    /// Makes every junction insert fail, leaving the entity insert before it to be rolled back.
    pub fn toggle_junction_failure(&self) {
        self.fail_junction_inserts.fetch_xor(true, Ordering::SeqCst);
    }

    pub fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    pub fn show_lookups(&self) -> usize {
        self.show_lookups.load(Ordering::SeqCst)
    }

    pub fn record_save(&self) {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
    }

    pub fn record_show_lookup(&self) {
        self.show_lookups.fetch_add(1, Ordering::SeqCst);
    }

    pub async fn read<R, Q>(&self, query: Q) -> Result<R, RepositoryError>
    where
        Q: FnOnce(&Tables) -> R + Send,
    {
        self.ensure_online()?;
        let tables = self.tables.read().await;
        Ok(query(&tables))
    }

    pub async fn transaction<S>(&self, statements: S) -> Result<(), RepositoryError>
    where
        S: FnOnce(&mut Transaction<'_>) -> Result<(), RepositoryError> + Send,
    {
        self.ensure_online()?;
        let mut tables = self.tables.write().await;
        let mut staged = tables.clone();
        let mut transaction = Transaction {
            tables: &mut staged,
            fail_junction_inserts: self.fail_junction_inserts.load(Ordering::SeqCst),
        };
        statements(&mut transaction)?;
        *tables = staged;
        Ok(())
    }

    fn ensure_online(&self) -> Result<(), RepositoryError> {
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(RepositoryError::Backend("Database offline".into()));
        }
        Ok(())
    }
}

pub struct Transaction<'a> {
    tables: &'a mut Tables,
    fail_junction_inserts: bool,
}

impl Transaction<'_> {
    pub fn insert_show(&mut self, record: ShowRecord) -> Result<(), RepositoryError> {
        let clash = self.tables.shows.iter().find(|existing| {
            existing.id == record.id || existing.title == record.title || existing.slug == record.slug
        });
        if let Some(existing) = clash {
            return Err(RepositoryError::UniqueViolation(format!(
                "show row clashes with '{}'",
                existing.id
            )));
        }
        self.tables.shows.push(record);
        Ok(())
    }

    pub fn insert_episode(&mut self, record: EpisodeRecord) -> Result<(), RepositoryError> {
        self.ensure_show(&record.show_id)?;
        let clash = self
            .tables
            .episodes
            .iter()
            .find(|existing| existing.id == record.id || existing.title == record.title);
        if let Some(existing) = clash {
            return Err(RepositoryError::UniqueViolation(format!(
                "episode row clashes with '{}'",
                existing.id
            )));
        }
        self.tables.episodes.push(record);
        Ok(())
    }

    pub fn insert_distribution(&mut self, record: DistributionRecord) -> Result<(), RepositoryError> {
        self.ensure_show(&record.show_id)?;
        let clash = self.tables.distributions.iter().find(|existing| {
            existing.id == record.id || existing.title == record.title || existing.slug == record.slug
        });
        if let Some(existing) = clash {
            return Err(RepositoryError::UniqueViolation(format!(
                "distribution row clashes with '{}'",
                existing.id
            )));
        }
        self.tables.distributions.push(record);
        Ok(())
    }

    pub fn insert_show_episode(&mut self, record: JunctionRecord) -> Result<(), RepositoryError> {
        self.ensure_junction_insert(&record.show_id)?;
        self.tables.show_episodes.push(record);
        Ok(())
    }

    pub fn insert_show_distribution(&mut self, record: JunctionRecord) -> Result<(), RepositoryError> {
        self.ensure_junction_insert(&record.show_id)?;
        self.tables.show_distributions.push(record);
        Ok(())
    }

    fn ensure_junction_insert(&self, show_id: &str) -> Result<(), RepositoryError> {
        if self.fail_junction_inserts {
            return Err(RepositoryError::Backend("junction insert failed".into()));
        }
        self.ensure_show(show_id)
    }

    fn ensure_show(&self, show_id: &str) -> Result<(), RepositoryError> {
        if self.tables.shows.iter().any(|show| show.id == show_id) {
            return Ok(());
        }
        Err(RepositoryError::Backend(format!(
            "foreign key violation: show '{show_id}' does not exist"
        )))
    }
}
