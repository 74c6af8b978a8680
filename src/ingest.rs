//! Boundary normalization for records arriving from the external data
//! service.
//!
//! Records reach this service as loosely-typed JSON. Everything is
//! coerced into the typed models before any domain code sees it: bad
//! numerics become 0, unknown enumerations fall back to safe defaults,
//! missing ids are minted fresh. Normalization never fails; a malformed
//! record yields a defaulted entity, not an error.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tokio::fs;
use uuid::Uuid;

use crate::models::{BlogPost, Book, BookFormat, PodcastEpisode};

pub fn book_from_record(record: &Value) -> Book {
    Book {
        id: uuid_field(record, "id"),
        title: string_field(record, "title"),
        author: string_field(record, "author"),
        description: optional_string_field(record, "description"),
        genre: {
            let genre = string_field(record, "genre");
            if genre.is_empty() {
                "General".to_string()
            } else {
                genre
            }
        },
        price: non_negative_int(record, "price"),
        stock: non_negative_int(record, "stock").min(i32::MAX as i64) as i32,
        format: match record.get("format").and_then(Value::as_str) {
            Some(s) if s.eq_ignore_ascii_case("digital") => BookFormat::Digital,
            _ => BookFormat::Physical,
        },
        is_new: bool_field(record, "is_new"),
        is_bestseller: bool_field(record, "is_bestseller"),
        created_at: timestamp_field(record, "created_at"),
    }
}

pub fn books_from_records(records: &[Value]) -> Vec<Book> {
    records.iter().map(book_from_record).collect()
}

pub fn post_from_record(record: &Value) -> BlogPost {
    BlogPost {
        id: uuid_field(record, "id"),
        title: string_field(record, "title"),
        excerpt: optional_string_field(record, "excerpt"),
        body: string_field(record, "body"),
        published_at: timestamp_field(record, "published_at"),
    }
}

pub fn posts_from_records(records: &[Value]) -> Vec<BlogPost> {
    records.iter().map(post_from_record).collect()
}

pub fn episode_from_record(record: &Value) -> PodcastEpisode {
    PodcastEpisode {
        id: uuid_field(record, "id"),
        title: string_field(record, "title"),
        description: optional_string_field(record, "description"),
        audio_url: string_field(record, "audio_url"),
        duration_secs: non_negative_int(record, "duration_secs"),
        published_at: timestamp_field(record, "published_at"),
    }
}

pub fn episodes_from_records(records: &[Value]) -> Vec<PodcastEpisode> {
    records.iter().map(episode_from_record).collect()
}

/// Read a seed file as an array of raw records. A missing or malformed
/// file logs a warning and yields an empty collection so the service
/// still starts.
pub async fn load_records(path: &Path) -> Vec<Value> {
    let raw = match fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "seed file unreadable, starting empty");
            return Vec::new();
        }
    };
    match serde_json::from_str::<Vec<Value>>(&raw) {
        Ok(records) => records,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "seed file malformed, starting empty");
            Vec::new()
        }
    }
}

fn string_field(record: &Value, key: &str) -> String {
    record
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn optional_string_field(record: &Value, key: &str) -> Option<String> {
    record
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Numeric coercion rules: integers pass through, floats truncate,
/// numeric strings parse, anything else is 0. Negatives clamp to 0.
fn non_negative_int(record: &Value, key: &str) -> i64 {
    let value = match record.get(key) {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse::<i64>().unwrap_or(0),
        _ => 0,
    };
    value.max(0)
}

fn bool_field(record: &Value, key: &str) -> bool {
    record.get(key).and_then(Value::as_bool).unwrap_or(false)
}

fn uuid_field(record: &Value, key: &str) -> Uuid {
    record
        .get(key)
        .and_then(Value::as_str)
        .and_then(|s| Uuid::parse_str(s).ok())
        .unwrap_or_else(Uuid::new_v4)
}

fn timestamp_field(record: &Value, key: &str) -> DateTime<Utc> {
    record
        .get(key)
        .and_then(Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(Utc::now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn well_formed_record_round_trips() {
        let record = json!({
            "id": "7b9ad9c2-94a4-4f41-bd3a-3a3f7b3b7a10",
            "title": "The Quiet Tide",
            "author": "Ana Serra",
            "description": "Collected poems",
            "genre": "Poetry",
            "price": 1800,
            "stock": 12,
            "format": "digital",
            "is_new": true,
            "is_bestseller": false,
            "created_at": "2026-03-01T09:00:00Z"
        });
        let book = book_from_record(&record);
        assert_eq!(book.title, "The Quiet Tide");
        assert_eq!(book.price, 1_800);
        assert_eq!(book.format, BookFormat::Digital);
        assert!(book.is_new);
        assert_eq!(book.genre, "Poetry");
    }

    #[test]
    fn malformed_numerics_coerce_to_zero() {
        let record = json!({
            "title": "Odd Row",
            "author": "x",
            "price": "not-a-number",
            "stock": -4
        });
        let book = book_from_record(&record);
        assert_eq!(book.price, 0);
        assert_eq!(book.stock, 0);
    }

    #[test]
    fn numeric_strings_and_floats_are_accepted() {
        let record = json!({ "title": "x", "author": "x", "price": "2400", "stock": 3.9 });
        let book = book_from_record(&record);
        assert_eq!(book.price, 2_400);
        assert_eq!(book.stock, 3);
    }

    #[test]
    fn unknown_format_falls_back_to_physical() {
        let record = json!({ "title": "x", "author": "x", "format": "hologram" });
        assert_eq!(book_from_record(&record).format, BookFormat::Physical);
    }

    #[test]
    fn missing_genre_defaults_to_general() {
        let record = json!({ "title": "x", "author": "x" });
        assert_eq!(book_from_record(&record).genre, "General");
    }

    #[test]
    fn bad_id_gets_a_fresh_uuid() {
        let record = json!({ "id": "not-a-uuid", "title": "x", "author": "x" });
        let a = book_from_record(&record);
        let b = book_from_record(&record);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn empty_record_normalizes_without_error() {
        let book = book_from_record(&json!({}));
        assert_eq!(book.title, "");
        assert_eq!(book.price, 0);
        assert_eq!(book.format, BookFormat::Physical);
        assert!(!book.is_bestseller);
    }

    #[test]
    fn episode_duration_clamps_to_zero() {
        let record = json!({ "title": "Ep 1", "audio_url": "https://cdn/ep1.mp3", "duration_secs": -90 });
        assert_eq!(episode_from_record(&record).duration_secs, 0);
    }
}
