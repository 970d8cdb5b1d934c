pub mod service;
pub mod use_cases;

pub use service::ReviewService;
pub use use_cases::*;
