use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
};
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    dto::{
        books::{BookList, CreateBookRequest, UpdateBookRequest},
        orders::{OrderList, OrderWithItems},
    },
    error::AppResult,
    middleware::session::AdminGuard,
    models::{Book, Order},
    response::ApiResponse,
    routes::params::{OrderListQuery, Pagination},
    services::admin_service,
    state::AppState,
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOrderStatusRequest {
    pub status: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct InventoryAdjustRequest {
    pub delta: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LowStockQuery {
    #[serde(flatten)]
    pub pagination: Pagination,
    pub threshold: Option<i32>,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/books", post(create_book))
        .route("/books/low-stock", get(list_low_stock))
        .route("/books/{id}", put(update_book))
        .route("/books/{id}", delete(delete_book))
        .route("/books/{id}/inventory", post(adjust_inventory))
        .route("/orders", get(list_all_orders))
        .route("/orders/{id}", get(get_order_admin))
        .route("/orders/{id}/status", put(update_order_status))
}

#[utoipa::path(
    post,
    path = "/api/admin/books",
    request_body = CreateBookRequest,
    responses(
        (status = 200, description = "Create book", body = ApiResponse<Book>)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn create_book(
    State(state): State<AppState>,
    _guard: AdminGuard,
    Json(payload): Json<CreateBookRequest>,
) -> AppResult<Json<ApiResponse<Book>>> {
    Ok(Json(admin_service::create_book(&state, payload).await?))
}

#[utoipa::path(
    put,
    path = "/api/admin/books/{id}",
    params(
        ("id" = Uuid, Path, description = "Book ID")
    ),
    request_body = UpdateBookRequest,
    responses(
        (status = 200, description = "Updated book", body = ApiResponse<Book>),
        (status = 404, description = "Book not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_book(
    State(state): State<AppState>,
    _guard: AdminGuard,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateBookRequest>,
) -> AppResult<Json<ApiResponse<Book>>> {
    Ok(Json(admin_service::update_book(&state, id, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/api/admin/books/{id}",
    params(
        ("id" = Uuid, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Deleted book"),
        (status = 404, description = "Book not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn delete_book(
    State(state): State<AppState>,
    _guard: AdminGuard,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    Ok(Json(admin_service::delete_book(&state, id).await?))
}

#[utoipa::path(
    post,
    path = "/api/admin/books/{id}/inventory",
    params(
        ("id" = Uuid, Path, description = "Book ID")
    ),
    request_body = InventoryAdjustRequest,
    responses(
        (status = 200, description = "Adjusted stock", body = ApiResponse<Book>),
        (status = 400, description = "Bad request"),
        (status = 404, description = "Book not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn adjust_inventory(
    State(state): State<AppState>,
    _guard: AdminGuard,
    Path(id): Path<Uuid>,
    Json(payload): Json<InventoryAdjustRequest>,
) -> AppResult<Json<ApiResponse<Book>>> {
    Ok(Json(
        admin_service::adjust_inventory(&state, id, payload).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/admin/books/low-stock",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
        ("threshold" = Option<i32>, Query, description = "Reorder threshold, default 5"),
    ),
    responses(
        (status = 200, description = "Physical books at or below the threshold", body = ApiResponse<BookList>)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_low_stock(
    State(state): State<AppState>,
    _guard: AdminGuard,
    Query(query): Query<LowStockQuery>,
) -> AppResult<Json<ApiResponse<BookList>>> {
    Ok(Json(admin_service::list_low_stock(&state, query).await?))
}

#[utoipa::path(
    get,
    path = "/api/admin/orders",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
        ("status" = Option<String>, Query, description = "Filter by order status"),
    ),
    responses(
        (status = 200, description = "All orders", body = ApiResponse<OrderList>)
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn list_all_orders(
    State(state): State<AppState>,
    _guard: AdminGuard,
    Query(query): Query<OrderListQuery>,
) -> AppResult<Json<ApiResponse<OrderList>>> {
    Ok(Json(admin_service::list_all_orders(&state, query).await?))
}

#[utoipa::path(
    get,
    path = "/api/admin/orders/{id}",
    params(
        ("id" = Uuid, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Order with items", body = ApiResponse<OrderWithItems>),
        (status = 404, description = "Order not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn get_order_admin(
    State(state): State<AppState>,
    _guard: AdminGuard,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<OrderWithItems>>> {
    Ok(Json(admin_service::get_order_admin(&state, id).await?))
}

#[utoipa::path(
    put,
    path = "/api/admin/orders/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Order ID")
    ),
    request_body = UpdateOrderStatusRequest,
    responses(
        (status = 200, description = "Updated order", body = ApiResponse<Order>),
        (status = 400, description = "Invalid status"),
        (status = 404, description = "Order not found"),
    ),
    security(("bearer_auth" = [])),
    tag = "Admin"
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    _guard: AdminGuard,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateOrderStatusRequest>,
) -> AppResult<Json<ApiResponse<Order>>> {
    Ok(Json(
        admin_service::update_order_status(&state, id, payload).await?,
    ))
}
