use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::shows::core::show::Show;
use crate::modules::shows::use_cases::get_show::query::GetShow;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ShowResponse {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub episodes: Vec<String>,
    pub distributions: Vec<String>,
}

impl From<Show> for ShowResponse {
    fn from(show: Show) -> Self {
        Self {
            id: show.id,
            title: show.title,
            slug: show.slug,
            episodes: show.episodes,
            distributions: show.distributions,
        }
    }
}

pub async fn handle(State(state): State<AppState>, Path(show_id): Path<String>) -> Response {
    match state.get_show.get_show(GetShow { show_id }).await {
        Ok(show) => Json(ShowResponse::from(show)).into_response(),
        Err(error) => error.into_response(),
    }
}
