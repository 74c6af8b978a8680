use std::sync::Arc;

use crate::config::AppConfig;
use crate::ingest;
use crate::store::{CartStore, CatalogStore, ContentStore, OrderStore, WishlistStore};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub carts: Arc<CartStore>,
    pub wishlists: Arc<WishlistStore>,
    pub orders: Arc<OrderStore>,
    pub content: Arc<ContentStore>,
}

impl AppState {
    pub fn new(catalog: CatalogStore, content: ContentStore) -> Self {
        Self {
            catalog: Arc::new(catalog),
            carts: Arc::new(CartStore::new()),
            wishlists: Arc::new(WishlistStore::new()),
            orders: Arc::new(OrderStore::new()),
            content: Arc::new(content),
        }
    }

    /// Build the state from the seed records under the configured data
    /// directory. Missing files log a warning and start empty.
    pub async fn load(config: &AppConfig) -> Self {
        let books =
            ingest::books_from_records(&ingest::load_records(&config.data_dir.join("books.json")).await);
        let posts =
            ingest::posts_from_records(&ingest::load_records(&config.data_dir.join("blog.json")).await);
        let episodes = ingest::episodes_from_records(
            &ingest::load_records(&config.data_dir.join("podcast.json")).await,
        );

        tracing::info!(
            books = books.len(),
            posts = posts.len(),
            episodes = episodes.len(),
            "catalog loaded"
        );

        Self::new(
            CatalogStore::new(books),
            ContentStore::new(posts, episodes),
        )
    }
}
