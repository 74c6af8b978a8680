use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

/// Per-session wishlists: an ordered set of book ids. Insertion order is
/// kept so the listing reads in the order the reader saved things.
pub struct WishlistStore {
    lists: RwLock<HashMap<Uuid, Vec<Uuid>>>,
}

impl Default for WishlistStore {
    fn default() -> Self {
        Self::new()
    }
}

impl WishlistStore {
    pub fn new() -> Self {
        Self {
            lists: RwLock::new(HashMap::new()),
        }
    }

    /// Returns false when the book was already saved.
    pub async fn add(&self, token: Uuid, book_id: Uuid) -> bool {
        let mut lists = self.lists.write().await;
        let list = lists.entry(token).or_default();
        if list.contains(&book_id) {
            return false;
        }
        list.push(book_id);
        true
    }

    pub async fn remove(&self, token: Uuid, book_id: Uuid) -> bool {
        let mut lists = self.lists.write().await;
        let Some(list) = lists.get_mut(&token) else {
            return false;
        };
        let before = list.len();
        list.retain(|id| *id != book_id);
        list.len() < before
    }

    pub async fn list(&self, token: Uuid) -> Vec<Uuid> {
        self.lists
            .read()
            .await
            .get(&token)
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn duplicate_saves_are_ignored() {
        let store = WishlistStore::new();
        let token = Uuid::new_v4();
        let book_id = Uuid::new_v4();

        assert!(store.add(token, book_id).await);
        assert!(!store.add(token, book_id).await);
        assert_eq!(store.list(token).await.len(), 1);
    }

    #[tokio::test]
    async fn insertion_order_is_preserved() {
        let store = WishlistStore::new();
        let token = Uuid::new_v4();
        let ids: Vec<Uuid> = (0..4).map(|_| Uuid::new_v4()).collect();
        for id in &ids {
            store.add(token, *id).await;
        }
        assert_eq!(store.list(token).await, ids);
    }

    #[tokio::test]
    async fn removing_a_missing_entry_reports_false() {
        let store = WishlistStore::new();
        let token = Uuid::new_v4();
        assert!(!store.remove(token, Uuid::new_v4()).await);
    }
}
