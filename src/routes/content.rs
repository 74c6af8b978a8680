use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};

use crate::{
    dto::content::{BlogList, PodcastList},
    error::AppResult,
    response::ApiResponse,
    routes::params::Pagination,
    services::content_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/blog", get(list_posts))
        .route("/podcast", get(list_episodes))
}

#[utoipa::path(
    get,
    path = "/api/blog",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
    ),
    responses(
        (status = 200, description = "Blog posts, newest first", body = ApiResponse<BlogList>)
    ),
    tag = "Content"
)]
pub async fn list_posts(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<BlogList>>> {
    Ok(Json(content_service::list_posts(&state, pagination).await?))
}

#[utoipa::path(
    get,
    path = "/api/podcast",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
    ),
    responses(
        (status = 200, description = "Podcast episodes, newest first", body = ApiResponse<PodcastList>)
    ),
    tag = "Content"
)]
pub async fn list_episodes(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<PodcastList>>> {
    Ok(Json(
        content_service::list_episodes(&state, pagination).await?,
    ))
}
