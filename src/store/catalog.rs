use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Book, BookFormat, CartLine};

/// The book collection, held in memory for the lifetime of the process.
/// Reads hand out snapshots so the pure catalog pipeline never runs
/// under the lock.
pub struct CatalogStore {
    books: RwLock<Vec<Book>>,
}

impl CatalogStore {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }

    pub async fn snapshot(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    pub async fn get(&self, id: Uuid) -> Option<Book> {
        self.books.read().await.iter().find(|b| b.id == id).cloned()
    }

    pub async fn insert(&self, book: Book) {
        self.books.write().await.push(book);
    }

    pub async fn update<F>(&self, id: Uuid, apply: F) -> AppResult<Book>
    where
        F: FnOnce(&mut Book) -> AppResult<()>,
    {
        let mut books = self.books.write().await;
        let book = books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(AppError::NotFound)?;
        apply(book)?;
        Ok(book.clone())
    }

    pub async fn remove(&self, id: Uuid) -> bool {
        let mut books = self.books.write().await;
        let before = books.len();
        books.retain(|b| b.id != id);
        books.len() < before
    }

    /// Validate and commit the stock movement for a checkout under a
    /// single write lock. Digital items carry no inventory, physical
    /// items must cover the requested quantity. On success every line's
    /// book is returned with stock already decremented.
    pub async fn take_stock(&self, lines: &[CartLine]) -> AppResult<Vec<(Book, i32)>> {
        let mut books = self.books.write().await;

        for line in lines {
            let book = books
                .iter()
                .find(|b| b.id == line.book_id)
                .ok_or_else(|| AppError::BadRequest("book not found".to_string()))?;
            if book.format == BookFormat::Physical && book.stock < line.quantity {
                return Err(AppError::BadRequest(format!(
                    "Insufficient stock for book {}",
                    book.id
                )));
            }
        }

        let mut taken = Vec::with_capacity(lines.len());
        for line in lines {
            if let Some(book) = books.iter_mut().find(|b| b.id == line.book_id) {
                if book.format == BookFormat::Physical {
                    book.stock -= line.quantity;
                }
                taken.push((book.clone(), line.quantity));
            }
        }
        Ok(taken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn book(stock: i32, format: BookFormat) -> Book {
        Book {
            id: Uuid::new_v4(),
            title: "t".to_string(),
            author: "a".to_string(),
            description: None,
            genre: "General".to_string(),
            price: 1_000,
            stock,
            format,
            is_new: false,
            is_bestseller: false,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn take_stock_decrements_physical_inventory() {
        let b = book(5, BookFormat::Physical);
        let id = b.id;
        let store = CatalogStore::new(vec![b]);

        let taken = store
            .take_stock(&[CartLine {
                book_id: id,
                quantity: 3,
            }])
            .await
            .expect("stock available");
        assert_eq!(taken[0].0.stock, 2);
        assert_eq!(store.get(id).await.expect("book").stock, 2);
    }

    #[tokio::test]
    async fn take_stock_rejects_shortage_without_partial_commit() {
        let a = book(5, BookFormat::Physical);
        let b = book(1, BookFormat::Physical);
        let (a_id, b_id) = (a.id, b.id);
        let store = CatalogStore::new(vec![a, b]);

        let result = store
            .take_stock(&[
                CartLine {
                    book_id: a_id,
                    quantity: 2,
                },
                CartLine {
                    book_id: b_id,
                    quantity: 4,
                },
            ])
            .await;
        assert!(result.is_err());
        // first line must not have been committed
        assert_eq!(store.get(a_id).await.expect("book").stock, 5);
    }

    #[tokio::test]
    async fn digital_items_ignore_stock() {
        let b = book(0, BookFormat::Digital);
        let id = b.id;
        let store = CatalogStore::new(vec![b]);

        let taken = store
            .take_stock(&[CartLine {
                book_id: id,
                quantity: 7,
            }])
            .await
            .expect("digital has no inventory");
        assert_eq!(taken[0].1, 7);
        assert_eq!(store.get(id).await.expect("book").stock, 0);
    }
}
