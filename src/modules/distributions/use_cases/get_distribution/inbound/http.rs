use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::modules::distributions::use_cases::create_distribution::inbound::http::DistributionResponse;
use crate::modules::distributions::use_cases::get_distribution::query::GetDistribution;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path((show_id, distribution_id)): Path<(String, String)>,
) -> Response {
    let query = GetDistribution {
        distribution_id,
        show_id,
    };
    match state.get_distribution.get_distribution(query).await {
        Ok(distribution) => Json(DistributionResponse::from(distribution)).into_response(),
        Err(error) => error.into_response(),
    }
}
