use crate::utils::error::ApiError;

/// Parse a numeric path parameter, rejecting with 400 before any
/// storage call happens.
pub fn parse_id(raw: &str, what: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::BadRequest(format!("Invalid {}", what)))
}
