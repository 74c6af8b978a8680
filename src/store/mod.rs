//! In-memory state containers injected through [`crate::state::AppState`].
//!
//! Catalog, blog, and podcast collections are loaded once at startup from
//! the external data service's records; carts, wishlists, and orders are
//! ephemeral session state. Nothing here touches disk after startup.

pub mod cart;
pub mod catalog;
pub mod content;
pub mod orders;
pub mod wishlist;

pub use cart::CartStore;
pub use catalog::CatalogStore;
pub use content::ContentStore;
pub use orders::OrderStore;
pub use wishlist::WishlistStore;
