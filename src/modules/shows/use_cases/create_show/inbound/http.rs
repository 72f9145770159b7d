use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::shows::core::show::Show;
use crate::modules::shows::use_cases::create_show::command::CreateShow;
use crate::shell::http::{bad_request, require_non_empty};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateShowBody {
    pub title: String,
    pub slug: String,
}

#[derive(Serialize)]
pub struct CreateShowResponse {
    pub id: String,
    pub title: String,
    pub slug: String,
}

impl From<Show> for CreateShowResponse {
    fn from(show: Show) -> Self {
        Self {
            id: show.id,
            title: show.title,
            slug: show.slug,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateShowBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return bad_request(rejection.body_text()),
    };
    if let Err(response) =
        require_non_empty(&[("title", body.title.as_str()), ("slug", body.slug.as_str())])
    {
        return response;
    }

    let command = CreateShow {
        title: body.title,
        slug: body.slug,
    };

    match state.create_show.create_show(command).await {
        Ok(show) => (StatusCode::CREATED, Json(CreateShowResponse::from(show))).into_response(),
        Err(error) => error.into_response(),
    }
}
