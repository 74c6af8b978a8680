use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::CartLine;

/// Session carts keyed by an opaque token. Quantities stay >= 1: setting
/// a line to 0 or less removes it instead of storing a zero.
pub struct CartStore {
    carts: RwLock<HashMap<Uuid, Vec<CartLine>>>,
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CartStore {
    pub fn new() -> Self {
        Self {
            carts: RwLock::new(HashMap::new()),
        }
    }

    pub async fn create(&self) -> Uuid {
        let token = Uuid::new_v4();
        self.carts.write().await.insert(token, Vec::new());
        token
    }

    pub async fn lines(&self, token: Uuid) -> Vec<CartLine> {
        self.carts
            .read()
            .await
            .get(&token)
            .cloned()
            .unwrap_or_default()
    }

    /// Add `quantity` of a book, merging into an existing line. Callers
    /// validate quantity >= 1 first.
    pub async fn add(&self, token: Uuid, book_id: Uuid, quantity: i32) -> CartLine {
        let mut carts = self.carts.write().await;
        let lines = carts.entry(token).or_default();
        if let Some(line) = lines.iter_mut().find(|l| l.book_id == book_id) {
            line.quantity += quantity;
            line.clone()
        } else {
            let line = CartLine { book_id, quantity };
            lines.push(line.clone());
            line
        }
    }

    /// Reducer semantics for the quantity stepper: a target of 0 or less
    /// removes the line. Returns the resulting line, or None when the
    /// line was removed or never existed.
    pub async fn set_quantity(&self, token: Uuid, book_id: Uuid, quantity: i32) -> Option<CartLine> {
        let mut carts = self.carts.write().await;
        let lines = carts.entry(token).or_default();
        if quantity <= 0 {
            lines.retain(|l| l.book_id != book_id);
            return None;
        }
        let line = lines.iter_mut().find(|l| l.book_id == book_id)?;
        line.quantity = quantity;
        Some(line.clone())
    }

    pub async fn remove(&self, token: Uuid, book_id: Uuid) -> bool {
        let mut carts = self.carts.write().await;
        let Some(lines) = carts.get_mut(&token) else {
            return false;
        };
        let before = lines.len();
        lines.retain(|l| l.book_id != book_id);
        lines.len() < before
    }

    pub async fn clear(&self, token: Uuid) {
        self.carts.write().await.remove(&token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn adding_an_existing_line_merges_quantities() {
        let store = CartStore::new();
        let token = store.create().await;
        let book_id = Uuid::new_v4();

        store.add(token, book_id, 1).await;
        let line = store.add(token, book_id, 2).await;
        assert_eq!(line.quantity, 3);
        assert_eq!(store.lines(token).await.len(), 1);
    }

    #[tokio::test]
    async fn setting_quantity_to_zero_removes_the_line() {
        let store = CartStore::new();
        let token = store.create().await;
        let book_id = Uuid::new_v4();

        store.add(token, book_id, 2).await;
        assert!(store.set_quantity(token, book_id, 0).await.is_none());
        assert!(store.lines(token).await.is_empty());
    }

    #[tokio::test]
    async fn quantities_never_drop_below_one() {
        let store = CartStore::new();
        let token = store.create().await;
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        store.add(token, a, 4).await;
        store.add(token, b, 1).await;
        store.set_quantity(token, a, 1).await;
        store.set_quantity(token, b, -3).await;

        let lines = store.lines(token).await;
        assert!(lines.iter().all(|l| l.quantity >= 1));
        assert_eq!(lines.len(), 1);
    }

    #[tokio::test]
    async fn carts_are_isolated_by_token() {
        let store = CartStore::new();
        let first = store.create().await;
        let second = store.create().await;
        let book_id = Uuid::new_v4();

        store.add(first, book_id, 1).await;
        assert!(store.lines(second).await.is_empty());
    }

    #[tokio::test]
    async fn clear_empties_the_cart() {
        let store = CartStore::new();
        let token = store.create().await;
        store.add(token, Uuid::new_v4(), 2).await;
        store.clear(token).await;
        assert!(store.lines(token).await.is_empty());
    }
}
