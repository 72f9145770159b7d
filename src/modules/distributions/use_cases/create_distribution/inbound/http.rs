use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::distributions::core::distribution::Distribution;
use crate::modules::distributions::use_cases::create_distribution::command::CreateDistribution;
use crate::shell::http::{bad_request, require_non_empty};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateDistributionBody {
    pub title: String,
    pub slug: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionResponse {
    pub id: String,
    pub show_id: String,
    pub title: String,
    pub slug: String,
}

impl From<Distribution> for DistributionResponse {
    fn from(distribution: Distribution) -> Self {
        Self {
            id: distribution.id,
            show_id: distribution.show_id,
            title: distribution.title,
            slug: distribution.slug,
        }
    }
}

pub async fn handle(
    State(state): State<AppState>,
    Path(show_id): Path<String>,
    body: Result<Json<CreateDistributionBody>, JsonRejection>,
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

    let command = CreateDistribution {
        show_id,
        title: body.title,
        slug: body.slug,
    };

    match state.create_distribution.create_distribution(command).await {
        Ok(distribution) => (
            StatusCode::CREATED,
            Json(DistributionResponse::from(distribution)),
        )
            .into_response(),
        Err(error) => error.into_response(),
    }
}
