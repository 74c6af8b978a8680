use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::cart::{AddToCartRequest, CartCreated, CartLineDto, CartView, SetQuantityRequest},
    dto::wishlist::WishlistView,
    error::{AppError, AppResult},
    middleware::session::CartSession,
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn create_cart(state: &AppState) -> AppResult<ApiResponse<CartCreated>> {
    let token = state.carts.create().await;
    Ok(ApiResponse::success(
        "Cart created",
        CartCreated { cart_token: token },
        None,
    ))
}

/// Cart contents joined against the live catalog. Lines whose book has
/// been withdrawn from the catalog are skipped rather than failing the
/// whole view.
pub async fn view_cart(state: &AppState, session: &CartSession) -> AppResult<ApiResponse<CartView>> {
    let lines = state.carts.lines(session.token).await;

    let mut items = Vec::with_capacity(lines.len());
    let mut subtotal: i64 = 0;
    for line in lines {
        if let Some(book) = state.catalog.get(line.book_id).await {
            let line_total = book.price * i64::from(line.quantity);
            subtotal += line_total;
            items.push(CartLineDto {
                book,
                quantity: line.quantity,
                line_total,
            });
        }
    }

    Ok(ApiResponse::success(
        "OK",
        CartView { items, subtotal },
        None,
    ))
}

pub async fn add_item(
    state: &AppState,
    session: &CartSession,
    payload: AddToCartRequest,
) -> AppResult<ApiResponse<CartLineDto>> {
    if payload.quantity <= 0 {
        return Err(AppError::BadRequest(
            "quantity must be greater than 0".to_string(),
        ));
    }
    let book = match state.catalog.get(payload.book_id).await {
        Some(b) => b,
        None => return Err(AppError::BadRequest("book not found".to_string())),
    };

    let line = state
        .carts
        .add(session.token, payload.book_id, payload.quantity)
        .await;

    log_audit(
        Some(session.token),
        "cart_add",
        Some("cart"),
        Some(serde_json::json!({ "book_id": payload.book_id, "quantity": line.quantity })),
    );

    let line_total = book.price * i64::from(line.quantity);
    Ok(ApiResponse::success(
        "OK",
        CartLineDto {
            book,
            quantity: line.quantity,
            line_total,
        },
        None,
    ))
}

/// Quantity stepper endpoint. A target of 0 or less removes the line
/// instead of storing a zero quantity.
pub async fn set_quantity(
    state: &AppState,
    session: &CartSession,
    book_id: Uuid,
    payload: SetQuantityRequest,
) -> AppResult<ApiResponse<serde_json::Value>> {
    if payload.quantity <= 0 {
        state
            .carts
            .set_quantity(session.token, book_id, payload.quantity)
            .await;
        log_audit(
            Some(session.token),
            "cart_remove",
            Some("cart"),
            Some(serde_json::json!({ "book_id": book_id })),
        );
        return Ok(ApiResponse::success(
            "Removed from cart",
            serde_json::json!({}),
            Some(Meta::empty()),
        ));
    }

    let line = state
        .carts
        .set_quantity(session.token, book_id, payload.quantity)
        .await;
    let line = match line {
        Some(l) => l,
        None => return Err(AppError::NotFound),
    };

    log_audit(
        Some(session.token),
        "cart_update",
        Some("cart"),
        Some(serde_json::json!({ "book_id": book_id, "quantity": line.quantity })),
    );

    Ok(ApiResponse::success(
        "OK",
        serde_json::json!({ "book_id": book_id, "quantity": line.quantity }),
        Some(Meta::empty()),
    ))
}

pub async fn remove_item(
    state: &AppState,
    session: &CartSession,
    book_id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    if !state.carts.remove(session.token, book_id).await {
        return Err(AppError::NotFound);
    }

    log_audit(
        Some(session.token),
        "cart_remove",
        Some("cart"),
        Some(serde_json::json!({ "book_id": book_id })),
    );

    Ok(ApiResponse::success(
        "Removed from cart",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub async fn list_wishlist(
    state: &AppState,
    session: &CartSession,
) -> AppResult<ApiResponse<WishlistView>> {
    let ids = state.wishlists.list(session.token).await;
    let mut items = Vec::with_capacity(ids.len());
    for id in ids {
        if let Some(book) = state.catalog.get(id).await {
            items.push(book);
        }
    }
    Ok(ApiResponse::success(
        "Wishlist",
        WishlistView { items },
        None,
    ))
}

pub async fn add_wishlist(
    state: &AppState,
    session: &CartSession,
    book_id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    if state.catalog.get(book_id).await.is_none() {
        return Err(AppError::BadRequest("book not found".to_string()));
    }
    let added = state.wishlists.add(session.token, book_id).await;
    let message = if added { "Saved" } else { "Already saved" };

    log_audit(
        Some(session.token),
        "wishlist_add",
        Some("wishlist"),
        Some(serde_json::json!({ "book_id": book_id })),
    );

    Ok(ApiResponse::success(
        message,
        serde_json::json!({ "book_id": book_id }),
        None,
    ))
}

pub async fn remove_wishlist(
    state: &AppState,
    session: &CartSession,
    book_id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    if !state.wishlists.remove(session.token, book_id).await {
        return Err(AppError::NotFound);
    }

    log_audit(
        Some(session.token),
        "wishlist_remove",
        Some("wishlist"),
        Some(serde_json::json!({ "book_id": book_id })),
    );

    Ok(ApiResponse::success(
        "Removed",
        serde_json::json!({}),
        None,
    ))
}
