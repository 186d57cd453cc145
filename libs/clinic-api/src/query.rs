//! Path and query-string construction for resource endpoints.

use std::borrow::Cow;
use std::fmt::Display;

/// Percent-encode one path segment (ids, codes)
#[must_use]
pub fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Ordered query parameters; absent optional values are skipped.
///
/// ```ignore
/// let path = QueryParams::new()
///     .push("branchId", "B1")
///     .push_opt("fromDate", Some("2024-01-01"))
///     .push_opt("toDate", None::<&str>)
///     .append_to("/reports/wait-time");
/// assert_eq!(path, "/reports/wait-time?branchId=B1&fromDate=2024-01-01");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn push(mut self, key: &str, value: impl Display) -> Self {
        self.pairs.push((key.to_owned(), value.to_string()));
        self
    }

    #[must_use]
    pub fn push_opt<V: Display>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.push(key, value),
            None => self,
        }
    }

    /// Add `key=true` only when `flag` is set
    #[must_use]
    pub fn push_flag(self, key: &str, flag: bool) -> Self {
        if flag { self.push(key, true) } else { self }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// `application/x-www-form-urlencoded` form, without the leading `?`
    #[must_use]
    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.pairs)
            .finish()
    }

    /// `path?query`, or `path` alone when there are no parameters
    #[must_use]
    pub fn append_to(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_owned()
        } else {
            format!("{path}?{}", self.encode())
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn reparse(path: &str) -> HashMap<String, String> {
        let (_, query) = path.split_once('?').unwrap();
        url::form_urlencoded::parse(query.as_bytes())
            .into_owned()
            .collect()
    }

    #[test]
    fn test_query_reparses_to_same_map() {
        let path = QueryParams::new()
            .push("branchId", "B1")
            .push("fromDate", "2024-01-01")
            .append_to("/reports/wait-time");

        let expected: HashMap<String, String> = [
            ("branchId".to_owned(), "B1".to_owned()),
            ("fromDate".to_owned(), "2024-01-01".to_owned()),
        ]
        .into();
        assert_eq!(reparse(&path), expected);
    }

    #[test]
    fn test_absent_values_skipped() {
        let path = QueryParams::new()
            .push("branchId", "B1")
            .push_opt("fromDate", None::<&str>)
            .push_opt("page", Some(2))
            .push_flag("onlyActive", false)
            .append_to("/ai-audit");
        assert_eq!(path, "/ai-audit?branchId=B1&page=2");
    }

    #[test]
    fn test_empty_params_leave_path_alone() {
        assert_eq!(QueryParams::new().append_to("/tenants"), "/tenants");
    }

    #[test]
    fn test_values_are_encoded() {
        let path = QueryParams::new()
            .push("returnUrl", "https://portal.example.com/pay?x=1&y=2")
            .append_to("/portal/billing/invoices/1/vnpay-url");
        assert!(!path.contains("?x=1"));
        assert_eq!(
            reparse(&path)["returnUrl"],
            "https://portal.example.com/pay?x=1&y=2"
        );
    }

    #[test]
    fn test_segment_encoding() {
        assert_eq!(segment("abc-123"), "abc-123");
        assert_eq!(segment("a/b c"), "a%2Fb%20c");
    }
}
