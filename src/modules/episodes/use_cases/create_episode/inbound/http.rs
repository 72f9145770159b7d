use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::episodes::core::episode::Episode;
use crate::modules::episodes::use_cases::create_episode::command::CreateEpisode;
use crate::shell::http::{bad_request, require_non_empty};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateEpisodeBody {
    pub title: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeResponse {
    pub id: String,
    pub show_id: String,
    pub title: String,
}

impl From<Episode> for EpisodeResponse {
    fn from(episode: Episode) -> Self {
        Self {
            id: episode.id,
            show_id: episode.show_id,
            title: episode.title,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    Path(show_id): Path<String>,
    body: Result<Json<CreateEpisodeBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return bad_request(rejection.body_text()),
    };
    if let Err(response) = require_non_empty(&[("title", body.title.as_str())]) {
        return response;
    }

    let command = CreateEpisode {
        show_id,
        title: body.title,
    };

    match state.create_episode.create_episode(command).await {
        Ok(episode) => (StatusCode::CREATED, Json(EpisodeResponse::from(episode))).into_response(),
        Err(error) => error.into_response(),
    }
}
