use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::modules::distributions::use_cases::create_distribution::inbound::http as create_distribution_http;
use crate::modules::distributions::use_cases::get_distribution::inbound::http as get_distribution_http;
use crate::modules::episodes::use_cases::create_episode::inbound::http as create_episode_http;
use crate::modules::episodes::use_cases::get_episode::inbound::http as get_episode_http;
use crate::modules::shows::use_cases::create_show::inbound::http as create_show_http;
use crate::modules::shows::use_cases::get_show::inbound::http as get_show_http;
use crate::shared::core::errors::{ApplicationError, ErrorCategory};
use crate::shell::state::AppState;

const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/show", post(create_show_http::handle))
        .route("/show/{show_id}", get(get_show_http::handle))
        .route("/show/{show_id}/episode", post(create_episode_http::handle))
        .route(
            "/show/{show_id}/episode/{episode_id}",
            get(get_episode_http::handle),
        )
        .route(
            "/show/{show_id}/distribution",
            post(create_distribution_http::handle),
        )
        .route(
            "/show/{show_id}/distribution/{distribution_id}",
            get(get_distribution_http::handle),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn bad_request(message: impl Into<String>) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Rejects the first field whose value is empty.
pub fn require_non_empty(fields: &[(&str, &str)]) -> Result<(), Response> {
    match fields.iter().find(|(_, value)| value.is_empty()) {
        Some((name, _)) => Err(bad_request(format!("{name} is required"))),
        None => Ok(()),
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = match self.category() {
            ErrorCategory::AlreadyExists => StatusCode::BAD_REQUEST,
            ErrorCategory::NotFound => StatusCode::NOT_FOUND,
            ErrorCategory::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let error = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
            INTERNAL_SERVER_ERROR.to_string()
        } else {
            self.to_string()
        };
        (status, Json(ErrorBody { error })).into_response()
    }
}
