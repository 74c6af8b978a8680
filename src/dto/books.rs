use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Book, BookFormat};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBookRequest {
    pub title: String,
    pub author: String,
    pub description: Option<String>,
    pub genre: String,
    pub price: i64,
    pub stock: i32,
    pub format: BookFormat,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_bestseller: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBookRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub genre: Option<String>,
    pub price: Option<i64>,
    pub stock: Option<i32>,
    pub format: Option<BookFormat>,
    pub is_new: Option<bool>,
    pub is_bestseller: Option<bool>,
}

#[derive(Serialize, ToSchema)]
pub struct BookList {
    pub items: Vec<Book>,
}
