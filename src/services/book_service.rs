use uuid::Uuid;

use crate::{
    catalog,
    dto::books::BookList,
    error::{AppError, AppResult},
    models::Book,
    response::{ApiResponse, Meta},
    routes::params::BookQuery,
    state::AppState,
};

/// Storefront listing: snapshot the catalog, run the pure filter/sort
/// pipeline, then paginate the result. Meta total is the filtered count,
/// not the shelf size.
pub async fn list_books(state: &AppState, query: BookQuery) -> AppResult<ApiResponse<BookList>> {
    let (page, limit, offset) = query.pagination.normalize();
    let criteria = query.criteria();

    let books = state.catalog.snapshot().await;
    let filtered = catalog::filter_and_sort(&books, &criteria);
    let total = filtered.len() as i64;

    let items: Vec<Book> = filtered
        .into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Books", BookList { items }, Some(meta)))
}

pub async fn get_book(state: &AppState, id: Uuid) -> AppResult<ApiResponse<Book>> {
    let book = match state.catalog.get(id).await {
        Some(b) => b,
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success("Book", book, None))
}
