use chrono::Utc;
use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::{
        books::{BookList, CreateBookRequest, UpdateBookRequest},
        orders::{OrderList, OrderWithItems},
    },
    error::{AppError, AppResult},
    models::{Book, BookFormat, Order},
    response::{ApiResponse, Meta},
    routes::admin::{InventoryAdjustRequest, LowStockQuery, UpdateOrderStatusRequest},
    routes::params::OrderListQuery,
    state::AppState,
};

pub async fn create_book(
    state: &AppState,
    payload: CreateBookRequest,
) -> AppResult<ApiResponse<Book>> {
    if payload.price < 0 {
        return Err(AppError::BadRequest("price cannot be negative".into()));
    }
    if payload.stock < 0 {
        return Err(AppError::BadRequest("stock cannot be negative".into()));
    }

    let book = Book {
        id: Uuid::new_v4(),
        title: payload.title,
        author: payload.author,
        description: payload.description,
        genre: payload.genre,
        price: payload.price,
        stock: payload.stock,
        format: payload.format,
        is_new: payload.is_new,
        is_bestseller: payload.is_bestseller,
        created_at: Utc::now(),
    };
    state.catalog.insert(book.clone()).await;

    log_audit(
        None,
        "book_create",
        Some("books"),
        Some(serde_json::json!({ "book_id": book.id })),
    );

    Ok(ApiResponse::success(
        "Book created",
        book,
        Some(Meta::empty()),
    ))
}

pub async fn update_book(
    state: &AppState,
    id: Uuid,
    payload: UpdateBookRequest,
) -> AppResult<ApiResponse<Book>> {
    if payload.price.is_some_and(|p| p < 0) {
        return Err(AppError::BadRequest("price cannot be negative".into()));
    }
    if payload.stock.is_some_and(|s| s < 0) {
        return Err(AppError::BadRequest("stock cannot be negative".into()));
    }

    let book = state
        .catalog
        .update(id, |book| {
            if let Some(title) = payload.title {
                book.title = title;
            }
            if let Some(author) = payload.author {
                book.author = author;
            }
            if let Some(description) = payload.description {
                book.description = Some(description);
            }
            if let Some(genre) = payload.genre {
                book.genre = genre;
            }
            if let Some(price) = payload.price {
                book.price = price;
            }
            if let Some(stock) = payload.stock {
                book.stock = stock;
            }
            if let Some(format) = payload.format {
                book.format = format;
            }
            if let Some(is_new) = payload.is_new {
                book.is_new = is_new;
            }
            if let Some(is_bestseller) = payload.is_bestseller {
                book.is_bestseller = is_bestseller;
            }
            Ok(())
        })
        .await?;

    log_audit(
        None,
        "book_update",
        Some("books"),
        Some(serde_json::json!({ "book_id": book.id })),
    );

    Ok(ApiResponse::success("Updated", book, Some(Meta::empty())))
}

pub async fn delete_book(state: &AppState, id: Uuid) -> AppResult<ApiResponse<serde_json::Value>> {
    if !state.catalog.remove(id).await {
        return Err(AppError::NotFound);
    }

    log_audit(
        None,
        "book_delete",
        Some("books"),
        Some(serde_json::json!({ "book_id": id })),
    );

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub async fn adjust_inventory(
    state: &AppState,
    id: Uuid,
    payload: InventoryAdjustRequest,
) -> AppResult<ApiResponse<Book>> {
    if payload.delta == 0 {
        return Err(AppError::BadRequest("delta must not be 0".into()));
    }

    let book = state
        .catalog
        .update(id, |book| {
            let new_stock = book.stock + payload.delta;
            if new_stock < 0 {
                return Err(AppError::BadRequest("stock cannot be negative".into()));
            }
            book.stock = new_stock;
            Ok(())
        })
        .await?;

    log_audit(
        None,
        "inventory_adjust",
        Some("books"),
        Some(serde_json::json!({ "book_id": book.id, "delta": payload.delta })),
    );

    Ok(ApiResponse::success(
        "Inventory updated",
        book,
        Some(Meta::empty()),
    ))
}

/// Physical titles at or below the reorder threshold, scarcest first.
pub async fn list_low_stock(
    state: &AppState,
    query: LowStockQuery,
) -> AppResult<ApiResponse<BookList>> {
    let threshold = query.threshold.unwrap_or(5);
    let (page, limit, offset) = query.pagination.normalize();

    let mut books: Vec<Book> = state
        .catalog
        .snapshot()
        .await
        .into_iter()
        .filter(|b| b.format == BookFormat::Physical && b.stock <= threshold)
        .collect();
    books.sort_by(|a, b| {
        a.stock
            .cmp(&b.stock)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });

    let total = books.len() as i64;
    let items: Vec<Book> = books
        .into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Low stock", BookList { items }, Some(meta)))
}

pub async fn list_all_orders(
    state: &AppState,
    query: OrderListQuery,
) -> AppResult<ApiResponse<OrderList>> {
    let (page, limit, offset) = query.pagination.normalize();
    let status = query.status.as_ref().filter(|s| !s.is_empty());

    let orders = state
        .orders
        .list(|o| status.is_none_or(|s| &o.status == s))
        .await;
    let total = orders.len() as i64;
    let items: Vec<Order> = orders
        .into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Orders", OrderList { items }, Some(meta)))
}

pub async fn get_order_admin(state: &AppState, id: Uuid) -> AppResult<ApiResponse<OrderWithItems>> {
    let (order, items) = match state.orders.find(id).await {
        Some(pair) => pair,
        None => return Err(AppError::NotFound),
    };

    Ok(ApiResponse::success(
        "Order found",
        OrderWithItems { order, items },
        Some(Meta::empty()),
    ))
}

pub async fn update_order_status(
    state: &AppState,
    id: Uuid,
    payload: UpdateOrderStatusRequest,
) -> AppResult<ApiResponse<Order>> {
    validate_order_status(&payload.status)?;

    let order = state
        .orders
        .update(id, |order| {
            order.status = payload.status.clone();
            order.updated_at = Utc::now();
            Ok(())
        })
        .await?;

    log_audit(
        None,
        "order_status_update",
        Some("orders"),
        Some(serde_json::json!({ "order_id": order.id, "status": order.status })),
    );

    Ok(ApiResponse::success(
        "Order updated",
        order,
        Some(Meta::empty()),
    ))
}

fn validate_order_status(status: &str) -> Result<(), AppError> {
    const VALID: [&str; 5] = ["pending", "paid", "shipped", "completed", "cancelled"];
    if VALID.contains(&status) {
        Ok(())
    } else {
        Err(AppError::BadRequest("Invalid order status".into()))
    }
}
