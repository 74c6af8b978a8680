use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get},
};
use uuid::Uuid;

use crate::{
    dto::wishlist::{AddWishlistRequest, WishlistView},
    error::AppResult,
    middleware::session::CartSession,
    response::ApiResponse,
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_wishlist).post(add_wishlist))
        .route("/{book_id}", delete(remove_wishlist))
}

#[utoipa::path(
    get,
    path = "/api/wishlist",
    params(
        ("x-cart-token" = Uuid, Header, description = "Cart session token")
    ),
    responses(
        (status = 200, description = "Saved books", body = ApiResponse<WishlistView>)
    ),
    tag = "Wishlist"
)]
pub async fn list_wishlist(
    State(state): State<AppState>,
    session: CartSession,
) -> AppResult<Json<ApiResponse<WishlistView>>> {
    Ok(Json(cart_service::list_wishlist(&state, &session).await?))
}

#[utoipa::path(
    post,
    path = "/api/wishlist",
    request_body = AddWishlistRequest,
    params(
        ("x-cart-token" = Uuid, Header, description = "Cart session token")
    ),
    responses(
        (status = 200, description = "Save a book", body = ApiResponse<serde_json::Value>),
        (status = 400, description = "Bad request"),
    ),
    tag = "Wishlist"
)]
pub async fn add_wishlist(
    State(state): State<AppState>,
    session: CartSession,
    Json(payload): Json<AddWishlistRequest>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    Ok(Json(
        cart_service::add_wishlist(&state, &session, payload.book_id).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/wishlist/{book_id}",
    params(
        ("book_id" = Uuid, Path, description = "Book ID"),
        ("x-cart-token" = Uuid, Header, description = "Cart session token")
    ),
    responses(
        (status = 200, description = "OK", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Entry not found"),
    ),
    tag = "Wishlist"
)]
pub async fn remove_wishlist(
    State(state): State<AppState>,
    session: CartSession,
    Path(book_id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    Ok(Json(
        cart_service::remove_wishlist(&state, &session, book_id).await?,
    ))
}
