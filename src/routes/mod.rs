use axum::Router;

use crate::state::AppState;

pub mod admin;
pub mod books;
pub mod cart;
pub mod content;
pub mod doc;
pub mod estimate;
pub mod health;
pub mod orders;
pub mod params;
pub mod wishlist;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/books", books::router())
        .nest("/estimate", estimate::router())
        .nest("/cart", cart::router())
        .nest("/wishlist", wishlist::router())
        .nest("/orders", orders::router())
        .nest("/admin", admin::router())
        .merge(content::router())
}
