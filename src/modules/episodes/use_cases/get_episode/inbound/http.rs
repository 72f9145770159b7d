use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::modules::episodes::use_cases::create_episode::inbound::http::EpisodeResponse;
use crate::modules::episodes::use_cases::get_episode::query::GetEpisode;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path((show_id, episode_id)): Path<(String, String)>,
) -> Response {
    let query = GetEpisode {
        episode_id,
        show_id,
    };
    match state.get_episode.get_episode(query).await {
        Ok(episode) => Json(EpisodeResponse::from(episode)).into_response(),
        Err(error) => error.into_response(),
    }
}
