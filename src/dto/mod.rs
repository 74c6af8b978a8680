pub mod books;
pub mod cart;
pub mod content;
pub mod estimate;
pub mod orders;
pub mod wishlist;
