use axum::{Json, Router, routing::post};

use crate::{
    dto::estimate::EstimateRequest,
    error::AppResult,
    pricing::{self, Estimate},
    response::ApiResponse,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(estimate))
}

#[utoipa::path(
    post,
    path = "/api/estimate",
    request_body = EstimateRequest,
    responses(
        (status = 200, description = "Price range for the requested service", body = ApiResponse<Estimate>)
    ),
    tag = "Estimate"
)]
pub async fn estimate(
    Json(payload): Json<EstimateRequest>,
) -> AppResult<Json<ApiResponse<Estimate>>> {
    let pages = payload.resolved_pages();
    let range = pricing::estimate(payload.service, pages, &payload.add_ons);
    Ok(Json(ApiResponse::success("Estimate", range, None)))
}
