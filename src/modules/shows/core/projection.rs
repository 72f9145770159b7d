// Folds the rows of `show ⟕ show_episodes ⟕ show_distributions` back into one Show.
//
// The join is the cross product of two independent one-to-many relations, so a
// show with E episodes and D distributions yields up to E×D rows. Every row
// repeats the show columns and carries at most one episode id and one
// distribution id. Child ids are collected into sets, never appended per row.

use crate::modules::shows::core::show::Show;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowJoinRow {
    pub show_id: String,
    pub title: String,
    pub slug: String,
    pub episode_id: Option<String>,
    pub distribution_id: Option<String>,
}

/// Returns `None` when there are no rows, i.e. no show has the requested id.
pub fn fold_show_rows<I>(rows: I) -> Option<Show>
where
    I: IntoIterator<Item = ShowJoinRow>,
{
    let mut show: Option<Show> = None;
    let mut episode_ids = BTreeSet::new();
    let mut distribution_ids = BTreeSet::new();

    for row in rows {
        let ShowJoinRow {
            show_id,
            title,
            slug,
            episode_id,
            distribution_id,
        } = row;
        if show.is_none() {
            show = Some(Show::new(show_id, title, slug));
        }
        if let Some(episode_id) = episode_id {
            episode_ids.insert(episode_id);
        }
        if let Some(distribution_id) = distribution_id {
            distribution_ids.insert(distribution_id);
        }
    }

    show.map(|mut show| {
        show.episodes = episode_ids.into_iter().collect();
        show.distributions = distribution_ids.into_iter().collect();
        show
    })
}
