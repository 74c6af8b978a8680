use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use uuid::Uuid;

use crate::{
    dto::books::BookList,
    error::AppResult,
    models::Book,
    response::ApiResponse,
    routes::params::BookQuery,
    services::book_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_books))
        .route("/{id}", get(get_book))
}

#[utoipa::path(
    get,
    path = "/api/books",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
        ("q" = Option<String>, Query, description = "Substring match on title, author, description"),
        ("genre" = Option<String>, Query, description = "Exact genre; 'all' disables the filter"),
        ("price_band" = Option<String>, Query, description = "all | low | mid | high"),
        ("new_only" = Option<bool>, Query, description = "Only new releases"),
        ("bestseller_only" = Option<bool>, Query, description = "Only bestsellers"),
        ("sort" = Option<String>, Query, description = "title-asc | title-desc | price-asc | price-desc"),
    ),
    responses(
        (status = 200, description = "List books", body = ApiResponse<BookList>)
    ),
    tag = "Books"
)]
pub async fn list_books(
    State(state): State<AppState>,
    Query(query): Query<BookQuery>,
) -> AppResult<Json<ApiResponse<BookList>>> {
    Ok(Json(book_service::list_books(&state, query).await?))
}

#[utoipa::path(
    get,
    path = "/api/books/{id}",
    params(
        ("id" = Uuid, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Get book", body = ApiResponse<Book>),
        (status = 404, description = "Book not found"),
    ),
    tag = "Books"
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Book>>> {
    Ok(Json(book_service::get_book(&state, id).await?))
}
