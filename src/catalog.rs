//! Catalog filter/sort pipeline.
//!
//! A pure pass over an in-memory book collection: predicates applied in
//! a fixed order (text, genre, price band, new flag, bestseller flag),
//! then exactly one stable sort over the surviving subset. Unrecognized
//! criteria degrade to their permissive defaults instead of erroring so
//! a half-filled search form still renders a sensible view.

use serde::Deserialize;
use utoipa::ToSchema;

use crate::models::Book;

/// Band thresholds in minor units: low < 1500, mid in [1500, 3000),
/// high >= 3000.
pub const PRICE_BAND_LOW_MAX: i64 = 1_500;
pub const PRICE_BAND_HIGH_MIN: i64 = 3_000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PriceBand {
    #[default]
    All,
    Low,
    Mid,
    High,
}

impl PriceBand {
    /// Lenient parse: anything unrecognized means "all".
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        match raw {
            Some(s) if s.eq_ignore_ascii_case("low") => PriceBand::Low,
            Some(s) if s.eq_ignore_ascii_case("mid") => PriceBand::Mid,
            Some(s) if s.eq_ignore_ascii_case("high") => PriceBand::High,
            _ => PriceBand::All,
        }
    }

    fn matches(self, price: i64) -> bool {
        match self {
            PriceBand::All => true,
            PriceBand::Low => price < PRICE_BAND_LOW_MAX,
            PriceBand::Mid => (PRICE_BAND_LOW_MAX..PRICE_BAND_HIGH_MIN).contains(&price),
            PriceBand::High => price >= PRICE_BAND_HIGH_MIN,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    #[default]
    TitleAsc,
    TitleDesc,
    PriceAsc,
    PriceDesc,
}

impl SortKey {
    /// Unknown sort keys fall back to title-ascending.
    pub fn parse_or_default(raw: Option<&str>) -> Self {
        match raw {
            Some(s) if s.eq_ignore_ascii_case("title-asc") => SortKey::TitleAsc,
            Some(s) if s.eq_ignore_ascii_case("title-desc") => SortKey::TitleDesc,
            Some(s) if s.eq_ignore_ascii_case("price-asc") => SortKey::PriceAsc,
            Some(s) if s.eq_ignore_ascii_case("price-desc") => SortKey::PriceDesc,
            _ => SortKey::TitleAsc,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CatalogCriteria {
    /// Case-insensitive substring over title, author, and description.
    /// Empty matches everything.
    pub query: Option<String>,
    /// Exact genre; `None` or the "all" sentinel disables the filter.
    pub genre: Option<String>,
    pub price_band: PriceBand,
    pub new_only: bool,
    pub bestseller_only: bool,
    pub sort: SortKey,
}

pub fn filter_and_sort(items: &[Book], criteria: &CatalogCriteria) -> Vec<Book> {
    let query = criteria
        .query
        .as_deref()
        .map(str::to_lowercase)
        .filter(|q| !q.is_empty());
    let genre = criteria
        .genre
        .as_deref()
        .filter(|g| !g.is_empty() && !g.eq_ignore_ascii_case("all"));

    let mut result: Vec<Book> = items
        .iter()
        .filter(|book| query.as_deref().is_none_or(|q| matches_text(book, q)))
        .filter(|book| genre.is_none_or(|g| book.genre == g))
        .filter(|book| criteria.price_band.matches(book.price))
        .filter(|book| !criteria.new_only || book.is_new)
        .filter(|book| !criteria.bestseller_only || book.is_bestseller)
        .cloned()
        .collect();

    // One stable sort over the filtered subset; ties keep input order.
    match criteria.sort {
        SortKey::TitleAsc => {
            result.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        }
        SortKey::TitleDesc => {
            result.sort_by(|a, b| b.title.to_lowercase().cmp(&a.title.to_lowercase()))
        }
        SortKey::PriceAsc => result.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDesc => result.sort_by(|a, b| b.price.cmp(&a.price)),
    }

    result
}

fn matches_text(book: &Book, query: &str) -> bool {
    book.title.to_lowercase().contains(query)
        || book.author.to_lowercase().contains(query)
        || book
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookFormat;
    use chrono::Utc;
    use uuid::Uuid;

    fn book(title: &str, author: &str, genre: &str, price: i64) -> Book {
        Book {
            id: Uuid::new_v4(),
            title: title.to_string(),
            author: author.to_string(),
            description: None,
            genre: genre.to_string(),
            price,
            stock: 5,
            format: BookFormat::Physical,
            is_new: false,
            is_bestseller: false,
            created_at: Utc::now(),
        }
    }

    fn shelf() -> Vec<Book> {
        let mut tide = book("The Quiet Tide", "Ana Serra", "Poetry", 1_200);
        tide.is_new = true;
        let mut harbor = book("Harbor Lights", "Ana Serra", "Fiction", 2_400);
        harbor.is_bestseller = true;
        harbor.description = Some("A port town saga".to_string());
        let atlas = book("Atlas of Small Presses", "Joan Pico", "Essay", 3_600);
        vec![tide, harbor, atlas]
    }

    fn titles(books: &[Book]) -> Vec<&str> {
        books.iter().map(|b| b.title.as_str()).collect()
    }

    #[test]
    fn empty_query_matches_everything() {
        let items = shelf();
        let criteria = CatalogCriteria {
            query: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(filter_and_sort(&items, &criteria).len(), items.len());
    }

    #[test]
    fn text_search_is_case_insensitive_over_all_fields() {
        let items = shelf();
        for needle in ["quiet", "SERRA", "port town"] {
            let criteria = CatalogCriteria {
                query: Some(needle.to_string()),
                ..Default::default()
            };
            assert!(
                !filter_and_sort(&items, &criteria).is_empty(),
                "no match for {needle}"
            );
        }
    }

    #[test]
    fn title_sort_orders_ascending() {
        let items = vec![book("B", "x", "Fiction", 10), book("A", "x", "Fiction", 20)];
        let sorted = filter_and_sort(&items, &CatalogCriteria::default());
        assert_eq!(titles(&sorted), ["A", "B"]);
    }

    #[test]
    fn price_sort_descending() {
        let items = shelf();
        let criteria = CatalogCriteria {
            sort: SortKey::PriceDesc,
            ..Default::default()
        };
        let sorted = filter_and_sort(&items, &criteria);
        assert_eq!(
            titles(&sorted),
            ["Atlas of Small Presses", "Harbor Lights", "The Quiet Tide"]
        );
    }

    #[test]
    fn equal_sort_keys_keep_input_order() {
        let items = vec![
            book("First In", "x", "Fiction", 900),
            book("Second In", "x", "Fiction", 900),
            book("Third In", "x", "Fiction", 900),
        ];
        let criteria = CatalogCriteria {
            sort: SortKey::PriceAsc,
            ..Default::default()
        };
        let sorted = filter_and_sort(&items, &criteria);
        assert_eq!(titles(&sorted), ["First In", "Second In", "Third In"]);
    }

    #[test]
    fn genre_all_sentinel_disables_the_filter() {
        let items = shelf();
        let criteria = CatalogCriteria {
            genre: Some("All".to_string()),
            ..Default::default()
        };
        assert_eq!(filter_and_sort(&items, &criteria).len(), items.len());
    }

    #[test]
    fn conjunction_with_no_survivors_is_empty() {
        let items = shelf();
        let criteria = CatalogCriteria {
            genre: Some("Poetry".to_string()),
            bestseller_only: true,
            ..Default::default()
        };
        assert!(filter_and_sort(&items, &criteria).is_empty());
    }

    #[test]
    fn price_band_boundaries() {
        assert!(PriceBand::Low.matches(1_499));
        assert!(!PriceBand::Low.matches(1_500));
        assert!(PriceBand::Mid.matches(1_500));
        assert!(PriceBand::Mid.matches(2_999));
        assert!(!PriceBand::Mid.matches(3_000));
        assert!(PriceBand::High.matches(3_000));
        assert!(!PriceBand::High.matches(2_999));
    }

    #[test]
    fn unknown_criteria_fall_back_to_defaults() {
        assert_eq!(SortKey::parse_or_default(Some("newest")), SortKey::TitleAsc);
        assert_eq!(SortKey::parse_or_default(None), SortKey::TitleAsc);
        assert_eq!(PriceBand::parse_or_default(Some("luxury")), PriceBand::All);
        assert_eq!(SortKey::parse_or_default(Some("price-desc")), SortKey::PriceDesc);
    }

    #[test]
    fn pipeline_is_idempotent() {
        let items = shelf();
        let criteria = CatalogCriteria {
            query: Some("a".to_string()),
            sort: SortKey::PriceAsc,
            ..Default::default()
        };
        let once = filter_and_sort(&items, &criteria);
        let twice = filter_and_sort(&once, &criteria);
        let ids_once: Vec<_> = once.iter().map(|b| b.id).collect();
        let ids_twice: Vec<_> = twice.iter().map(|b| b.id).collect();
        assert_eq!(ids_once, ids_twice);
    }

    #[test]
    fn extra_constraints_never_grow_the_result() {
        let items = shelf();
        let loose = CatalogCriteria::default();
        let tighter = CatalogCriteria {
            genre: Some("Fiction".to_string()),
            ..Default::default()
        };
        let tightest = CatalogCriteria {
            genre: Some("Fiction".to_string()),
            new_only: true,
            price_band: PriceBand::Mid,
            ..Default::default()
        };
        let a = filter_and_sort(&items, &loose).len();
        let b = filter_and_sort(&items, &tighter).len();
        let c = filter_and_sort(&items, &tightest).len();
        assert!(a >= b && b >= c);
    }
}
