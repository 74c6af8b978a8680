use serde::Deserialize;
use utoipa::ToSchema;

use crate::catalog::{CatalogCriteria, PriceBand, SortKey};

#[derive(Debug, Deserialize, ToSchema)]
pub struct Pagination {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl Pagination {
    pub fn normalize(&self) -> (i64, i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let per_page = self.per_page.unwrap_or(20).clamp(1, 100);
        let offset = (page - 1) * per_page;
        (page, per_page, offset)
    }
}

/// Storefront search form. Band and sort arrive as raw strings so an
/// unexpected value degrades to the default instead of rejecting the
/// request.
#[derive(Debug, Deserialize, ToSchema)]
pub struct BookQuery {
    #[serde(flatten)]
    pub pagination: Pagination,
    pub q: Option<String>,
    pub genre: Option<String>,
    pub price_band: Option<String>,
    pub new_only: Option<bool>,
    pub bestseller_only: Option<bool>,
    pub sort: Option<String>,
}

impl BookQuery {
    pub fn criteria(&self) -> CatalogCriteria {
        CatalogCriteria {
            query: self.q.clone(),
            genre: self.genre.clone(),
            price_band: PriceBand::parse_or_default(self.price_band.as_deref()),
            new_only: self.new_only.unwrap_or(false),
            bestseller_only: self.bestseller_only.unwrap_or(false),
            sort: SortKey::parse_or_default(self.sort.as_deref()),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct OrderListQuery {
    #[serde(flatten)]
    pub pagination: Pagination,
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_clamps_to_sane_bounds() {
        let p = Pagination {
            page: Some(-3),
            per_page: Some(1_000),
        };
        assert_eq!(p.normalize(), (1, 100, 0));
    }

    #[test]
    fn query_with_unknown_values_degrades_to_defaults() {
        let query = BookQuery {
            pagination: Pagination {
                page: None,
                per_page: None,
            },
            q: None,
            genre: None,
            price_band: Some("premium".to_string()),
            new_only: None,
            bestseller_only: None,
            sort: Some("relevance".to_string()),
        };
        let criteria = query.criteria();
        assert_eq!(criteria.price_band, PriceBand::All);
        assert_eq!(criteria.sort, SortKey::TitleAsc);
        assert!(!criteria.new_only);
    }
}
