use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, post, put},
};
use uuid::Uuid;

use crate::{
    dto::cart::{AddToCartRequest, CartCreated, CartLineDto, CartView, SetQuantityRequest},
    error::AppResult,
    middleware::session::CartSession,
    response::ApiResponse,
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_cart).get(view_cart))
        .route("/items", post(add_item))
        .route("/items/{book_id}", put(set_quantity))
        .route("/items/{book_id}", delete(remove_item))
}

#[utoipa::path(
    post,
    path = "/api/cart",
    responses(
        (status = 200, description = "Create a cart session", body = ApiResponse<CartCreated>)
    ),
    tag = "Cart"
)]
pub async fn create_cart(State(state): State<AppState>) -> AppResult<Json<ApiResponse<CartCreated>>> {
    Ok(Json(cart_service::create_cart(&state).await?))
}

#[utoipa::path(
    get,
    path = "/api/cart",
    params(
        ("x-cart-token" = Uuid, Header, description = "Cart session token")
    ),
    responses(
        (status = 200, description = "Cart contents with subtotal", body = ApiResponse<CartView>)
    ),
    tag = "Cart"
)]
pub async fn view_cart(
    State(state): State<AppState>,
    session: CartSession,
) -> AppResult<Json<ApiResponse<CartView>>> {
    Ok(Json(cart_service::view_cart(&state, &session).await?))
}

#[utoipa::path(
    post,
    path = "/api/cart/items",
    request_body = AddToCartRequest,
    params(
        ("x-cart-token" = Uuid, Header, description = "Cart session token")
    ),
    responses(
        (status = 200, description = "Add a book to the cart", body = ApiResponse<CartLineDto>),
        (status = 400, description = "Bad request"),
    ),
    tag = "Cart"
)]
pub async fn add_item(
    State(state): State<AppState>,
    session: CartSession,
    Json(payload): Json<AddToCartRequest>,
) -> AppResult<Json<ApiResponse<CartLineDto>>> {
    Ok(Json(cart_service::add_item(&state, &session, payload).await?))
}

#[utoipa::path(
    put,
    path = "/api/cart/items/{book_id}",
    request_body = SetQuantityRequest,
    params(
        ("book_id" = Uuid, Path, description = "Book ID"),
        ("x-cart-token" = Uuid, Header, description = "Cart session token")
    ),
    responses(
        (status = 200, description = "Set line quantity; 0 removes the line", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Line not found"),
    ),
    tag = "Cart"
)]
pub async fn set_quantity(
    State(state): State<AppState>,
    session: CartSession,
    Path(book_id): Path<Uuid>,
    Json(payload): Json<SetQuantityRequest>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    Ok(Json(
        cart_service::set_quantity(&state, &session, book_id, payload).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/cart/items/{book_id}",
    params(
        ("book_id" = Uuid, Path, description = "Book ID"),
        ("x-cart-token" = Uuid, Header, description = "Cart session token")
    ),
    responses(
        (status = 200, description = "OK", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Line not found"),
    ),
    tag = "Cart"
)]
pub async fn remove_item(
    State(state): State<AppState>,
    session: CartSession,
    Path(book_id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    Ok(Json(
        cart_service::remove_item(&state, &session, book_id).await?,
    ))
}
