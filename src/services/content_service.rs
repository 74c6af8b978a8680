use crate::{
    dto::content::{BlogList, PodcastList},
    error::AppResult,
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    state::AppState,
};

pub async fn list_posts(
    state: &AppState,
    pagination: Pagination,
) -> AppResult<ApiResponse<BlogList>> {
    let (page, limit, offset) = pagination.normalize();
    let posts = state.content.posts().await;
    let total = posts.len() as i64;
    let items = posts
        .into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Posts", BlogList { items }, Some(meta)))
}

pub async fn list_episodes(
    state: &AppState,
    pagination: Pagination,
) -> AppResult<ApiResponse<PodcastList>> {
    let (page, limit, offset) = pagination.normalize();
    let episodes = state.content.episodes().await;
    let total = episodes.len() as i64;
    let items = episodes
        .into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success(
        "Episodes",
        PodcastList { items },
        Some(meta),
    ))
}
