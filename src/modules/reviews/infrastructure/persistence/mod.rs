pub mod review_store_impl;

pub use review_store_impl::PgReviewStore;
