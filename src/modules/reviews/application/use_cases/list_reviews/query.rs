use crate::modules::reviews::domain::ReviewSort;

/// Query for one page of a title's reviews
#[derive(Debug, Clone, Default)]
pub struct ListReviewsQuery {
    pub mal_id: i32,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub sort: ReviewSort,
}

impl ListReviewsQuery {
    pub fn new(mal_id: i32) -> Self {
        Self {
            mal_id,
            ..Default::default()
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn sort(mut self, sort: ReviewSort) -> Self {
        self.sort = sort;
        self
    }
}
