use crate::shared::errors::AppError;

pub const MAX_COMMENT_LENGTH: usize = 5000;

pub struct Validator;

impl Validator {
    pub fn validate_mal_id(mal_id: i32) -> Result<(), AppError> {
        if mal_id <= 0 {
            return Err(AppError::ValidationError(
                "MAL ID must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Trim a review comment and reject empty or oversized text.
    pub fn validate_comment(comment: &str) -> Result<String, AppError> {
        let trimmed = comment.trim();
        if trimmed.is_empty() {
            return Err(AppError::ValidationError(
                "Comment cannot be empty".to_string(),
            ));
        }
        if trimmed.chars().count() > MAX_COMMENT_LENGTH {
            return Err(AppError::ValidationError(format!(
                "Comment too long (max {} characters)",
                MAX_COMMENT_LENGTH
            )));
        }
        Ok(trimmed.to_string())
    }

    pub fn validate_search_query(query: &str) -> Result<String, AppError> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(AppError::ValidationError(
                "Search query cannot be empty".to_string(),
            ));
        }
        if trimmed.len() > 255 {
            return Err(AppError::ValidationError(
                "Search query too long (max 255 characters)".to_string(),
            ));
        }
        Ok(trimmed.to_string())
    }
}
