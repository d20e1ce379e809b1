//! HTTP handlers: extractors in, resource envelopes out.

pub mod articles;
pub mod comments;
pub mod topics;
pub mod users;

use crate::error::ApiError;

/// Path ids arrive as text; anything that is not an integer is the caller's
/// error, reported before the store is touched.
pub(crate) fn parse_id(id: &str) -> Result<i32, ApiError> {
    id.parse().map_err(|_| ApiError::InvalidId)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_ids_parse() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id("-1").unwrap(), -1);
    }

    #[test]
    fn non_numeric_ids_are_invalid() {
        assert!(matches!(parse_id("invalidid"), Err(ApiError::InvalidId)));
        assert!(matches!(parse_id(""), Err(ApiError::InvalidId)));
        assert!(matches!(parse_id("1.5"), Err(ApiError::InvalidId)));
    }
}
