use chrono::Utc;
use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::orders::{CheckoutRequest, OrderList, OrderWithItems, PayOrderRequest},
    error::{AppError, AppResult},
    middleware::session::CartSession,
    models::{Order, OrderItem},
    response::{ApiResponse, Meta},
    routes::params::OrderListQuery,
    state::AppState,
};

pub async fn list_orders(
    state: &AppState,
    session: &CartSession,
    query: OrderListQuery,
) -> AppResult<ApiResponse<OrderList>> {
    let (page, limit, offset) = query.pagination.normalize();
    let status = query.status.as_ref().filter(|s| !s.is_empty());

    let orders = state
        .orders
        .list(|o| {
            o.cart_token == session.token && status.is_none_or(|s| &o.status == s)
        })
        .await;
    let total = orders.len() as i64;
    let items: Vec<Order> = orders
        .into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Ok", OrderList { items }, Some(meta)))
}

/// Turn the cart into an order: totals use the catalog price at the
/// moment of checkout, physical stock is decremented atomically, and the
/// cart is cleared on success.
pub async fn checkout(
    state: &AppState,
    session: &CartSession,
    _payload: CheckoutRequest,
) -> AppResult<ApiResponse<OrderWithItems>> {
    let lines = state.carts.lines(session.token).await;
    if lines.is_empty() {
        return Err(AppError::BadRequest("Cart is empty".into()));
    }

    let taken = state.catalog.take_stock(&lines).await?;

    let total_amount: i64 = taken
        .iter()
        .map(|(book, quantity)| book.price * i64::from(*quantity))
        .sum();

    let order_id = Uuid::new_v4();
    let now = Utc::now();
    let order = Order {
        id: order_id,
        cart_token: session.token,
        total_amount,
        status: "pending".into(),
        payment_status: "unpaid".into(),
        invoice_number: build_invoice_number(order_id),
        paid_at: None,
        created_at: now,
        updated_at: now,
    };

    let items: Vec<OrderItem> = taken
        .iter()
        .map(|(book, quantity)| OrderItem {
            id: Uuid::new_v4(),
            order_id,
            book_id: book.id,
            quantity: *quantity,
            price: book.price,
            created_at: now,
        })
        .collect();

    state.orders.insert(order.clone(), items.clone()).await;
    state.carts.clear(session.token).await;

    log_audit(
        Some(session.token),
        "checkout",
        Some("orders"),
        Some(serde_json::json!({ "order_id": order_id, "total": total_amount })),
    );

    Ok(ApiResponse::success(
        "Checkout success",
        OrderWithItems { order, items },
        Some(Meta::empty()),
    ))
}

pub async fn pay_order(
    state: &AppState,
    session: &CartSession,
    id: Uuid,
    payload: PayOrderRequest,
) -> AppResult<ApiResponse<OrderWithItems>> {
    let token = session.token;
    let order = state
        .orders
        .update(id, |order| {
            if order.cart_token != token {
                return Err(AppError::NotFound);
            }
            if order.invoice_number != payload.invoice_number {
                return Err(AppError::BadRequest("Invoice number does not match".into()));
            }
            if order.payment_status == "paid" {
                return Err(AppError::BadRequest("Order already paid".into()));
            }
            order.payment_status = "paid".into();
            order.status = "paid".into();
            order.paid_at = Some(Utc::now());
            order.updated_at = Utc::now();
            Ok(())
        })
        .await?;

    let items = state
        .orders
        .find(id)
        .await
        .map(|(_, items)| items)
        .unwrap_or_default();

    log_audit(
        Some(token),
        "order_paid",
        Some("orders"),
        Some(serde_json::json!({ "order_id": id })),
    );

    Ok(ApiResponse::success(
        "Payment recorded",
        OrderWithItems { order, items },
        Some(Meta::empty()),
    ))
}

pub async fn get_order(
    state: &AppState,
    session: &CartSession,
    id: Uuid,
) -> AppResult<ApiResponse<OrderWithItems>> {
    let found = state.orders.find(id).await;
    let (order, items) = match found {
        Some(pair) if pair.0.cart_token == session.token => pair,
        _ => return Err(AppError::NotFound),
    };

    Ok(ApiResponse::success(
        "OK",
        OrderWithItems { order, items },
        Some(Meta::empty()),
    ))
}

fn build_invoice_number(order_id: Uuid) -> String {
    let date = Utc::now().format("%Y%m%d");
    let suffix = order_id.to_string();
    let short = &suffix[..8];
    format!("INV-{}-{}", date, short)
}
