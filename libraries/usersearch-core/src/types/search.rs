/// Search request and response types
use super::{OrderBy, User};

/// Parameters of a single search call.
///
/// `order_field` stays a plain string so that whatever the caller asked for
/// can be reported back when the server rejects it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchRequest {
    /// Substring to look for; empty matches everything
    pub query: String,
    /// Maximum number of rows wanted
    pub limit: i64,
    /// Zero-based number of matching rows to skip
    pub offset: i64,
    /// `Id`, `Name`, `Age`, or empty for `Name`
    pub order_field: String,
    /// Sort direction
    pub order_by: OrderBy,
}

impl SearchRequest {
    /// Create a request for `query` with every other parameter defaulted
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Set the page size
    #[must_use]
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    /// Set the number of rows to skip
    #[must_use]
    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    /// Set the sort key and direction
    #[must_use]
    pub fn order_by(mut self, field: impl Into<String>, direction: OrderBy) -> Self {
        self.order_field = field.into();
        self.order_by = direction;
        self
    }
}

/// One page of search results
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchResponse {
    /// Rows of this page, in server order
    pub users: Vec<User>,
    /// Whether at least one more matching row exists after this page
    pub next_page: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let request = SearchRequest::new("ill");
        assert_eq!(request.query, "ill");
        assert_eq!(request.limit, 0);
        assert_eq!(request.offset, 0);
        assert_eq!(request.order_field, "");
        assert_eq!(request.order_by, OrderBy::AsIs);
    }

    #[test]
    fn test_builder_chain() {
        let request = SearchRequest::new("l")
            .with_limit(35)
            .with_offset(5)
            .order_by("Age", OrderBy::Desc);
        assert_eq!(request.limit, 35);
        assert_eq!(request.offset, 5);
        assert_eq!(request.order_field, "Age");
        assert_eq!(request.order_by, OrderBy::Desc);
    }
}
