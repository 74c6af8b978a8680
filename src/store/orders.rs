use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Order, OrderItem};

#[derive(Default)]
struct OrdersInner {
    orders: Vec<Order>,
    items: HashMap<Uuid, Vec<OrderItem>>,
}

/// Orders placed this process lifetime. The surrounding system archives
/// orders in the external data service; this container only backs the
/// live storefront session.
pub struct OrderStore {
    inner: RwLock<OrdersInner>,
}

impl Default for OrderStore {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(OrdersInner::default()),
        }
    }

    pub async fn insert(&self, order: Order, items: Vec<OrderItem>) {
        let mut inner = self.inner.write().await;
        inner.items.insert(order.id, items);
        inner.orders.push(order);
    }

    pub async fn find(&self, id: Uuid) -> Option<(Order, Vec<OrderItem>)> {
        let inner = self.inner.read().await;
        let order = inner.orders.iter().find(|o| o.id == id)?.clone();
        let items = inner.items.get(&id).cloned().unwrap_or_default();
        Some((order, items))
    }

    /// Newest-first listing of the orders matching `keep`.
    pub async fn list<F>(&self, keep: F) -> Vec<Order>
    where
        F: Fn(&Order) -> bool,
    {
        let inner = self.inner.read().await;
        let mut orders: Vec<Order> = inner.orders.iter().filter(|o| keep(o)).cloned().collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        orders
    }

    /// Apply a fallible mutation to one order under the write lock.
    pub async fn update<F>(&self, id: Uuid, apply: F) -> AppResult<Order>
    where
        F: FnOnce(&mut Order) -> AppResult<()>,
    {
        let mut inner = self.inner.write().await;
        let order = inner
            .orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or(AppError::NotFound)?;
        apply(order)?;
        Ok(order.clone())
    }
}
