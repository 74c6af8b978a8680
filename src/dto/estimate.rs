use serde::Deserialize;
use utoipa::ToSchema;

use crate::pricing::{self, AddOn, ServiceType};

/// Estimator form input. Counts are accepted as signed integers and
/// clamped to zero here, before the pure estimator runs; the estimator
/// itself has no failure mode.
#[derive(Debug, Deserialize, ToSchema)]
pub struct EstimateRequest {
    pub service: ServiceType,
    pub pages: Option<i64>,
    pub words: Option<i64>,
    #[serde(default)]
    pub add_ons: Vec<AddOn>,
}

impl EstimateRequest {
    /// Explicit positive page count wins; otherwise pages derive from the
    /// word count at 250 words/page. Anything negative or absent is 0.
    pub fn resolved_pages(&self) -> u32 {
        let pages = self.pages.unwrap_or(0).max(0);
        if pages > 0 {
            pages.min(i64::from(u32::MAX)) as u32
        } else {
            let words = self.words.unwrap_or(0).max(0) as u64;
            pricing::pages_from_words(words)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(pages: Option<i64>, words: Option<i64>) -> EstimateRequest {
        EstimateRequest {
            service: ServiceType::Revision,
            pages,
            words,
            add_ons: Vec::new(),
        }
    }

    #[test]
    fn explicit_pages_win_over_words() {
        assert_eq!(request(Some(80), Some(100_000)).resolved_pages(), 80);
    }

    #[test]
    fn words_only_input_derives_pages() {
        assert_eq!(request(None, Some(500)).resolved_pages(), 2);
        assert_eq!(request(Some(0), Some(501)).resolved_pages(), 3);
    }

    #[test]
    fn negative_counts_clamp_to_zero() {
        assert_eq!(request(Some(-10), None).resolved_pages(), 0);
        assert_eq!(request(None, Some(-99)).resolved_pages(), 0);
    }

    #[test]
    fn absent_counts_resolve_to_zero() {
        assert_eq!(request(None, None).resolved_pages(), 0);
    }
}
