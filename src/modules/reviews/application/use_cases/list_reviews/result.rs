use serde::Serialize;

use crate::modules::reviews::domain::Review;
use crate::shared::application::pagination::PaginatedResult;

/// A page of reviews plus the title's current aggregate score
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewPage {
    pub reviews: Vec<Review>,
    pub total_reviews: u64,
    pub average_score: f64,
    pub current_page: u32,
    pub total_pages: u32,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl ReviewPage {
    pub fn new(page: PaginatedResult<Review>, average_score: f64) -> Self {
        let has_next_page = page.has_next_page();
        let has_prev_page = page.has_prev_page();
        Self {
            reviews: page.items,
            total_reviews: page.total_count,
            average_score,
            current_page: page.page,
            total_pages: page.total_pages,
            has_next_page,
            has_prev_page,
        }
    }
}
