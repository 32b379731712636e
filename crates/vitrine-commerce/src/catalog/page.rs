//! Pagination cursor state.

use serde::{Deserialize, Serialize};

/// Cursor state returned alongside a product listing.
///
/// Mirrors the storefront connection `pageInfo` shape. Backward cursors are
/// carried for completeness, but paging through the catalog is forward-only:
/// callers re-fetch from the start rather than walking `start_cursor`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageInfo {
    /// Whether another page follows this one.
    pub has_next_page: bool,
    /// Cursor to pass as `after` to fetch the next page.
    pub end_cursor: Option<String>,
    /// Whether a page precedes this one.
    pub has_previous_page: bool,
    /// Cursor marking the start of this page.
    pub start_cursor: Option<String>,
}

impl PageInfo {
    /// Forward-only page info, as produced for the sample fallback.
    pub fn forward(has_next_page: bool) -> Self {
        Self {
            has_next_page,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_platform_shape() {
        let raw = r#"{
            "hasNextPage": true,
            "endCursor": "abc",
            "hasPreviousPage": false,
            "startCursor": "aaa"
        }"#;
        let info: PageInfo = serde_json::from_str(raw).unwrap();
        assert!(info.has_next_page);
        assert_eq!(info.end_cursor.as_deref(), Some("abc"));
    }

    #[test]
    fn test_missing_fields_default() {
        let info: PageInfo = serde_json::from_str(r#"{"hasNextPage": false}"#).unwrap();
        assert!(!info.has_next_page);
        assert!(info.end_cursor.is_none());
        assert!(!info.has_previous_page);
    }
}
