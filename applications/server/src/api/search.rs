/// Search API route
use crate::{
    error::{Result, ServerError},
    services::SearchQuery,
    state::AppState,
};
use axum::{
    extract::{RawQuery, State},
    Json,
};
use usersearch_core::{protocol::params, OrderBy, OrderField, User};

/// Raw query string parameters.
///
/// Everything arrives as text so that malformed values can be answered with
/// the protocol's own error bodies. A repeated key keeps its first value.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub query: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
    pub order_field: Option<String>,
    pub order_by: Option<String>,
}

impl SearchParams {
    /// Decode a form-urlencoded query string. Unknown keys are ignored.
    pub fn from_query_string(raw: &str) -> Self {
        let mut parsed = Self::default();

        for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
            let slot = match &*key {
                params::QUERY => &mut parsed.query,
                params::LIMIT => &mut parsed.limit,
                params::OFFSET => &mut parsed.offset,
                params::ORDER_FIELD => &mut parsed.order_field,
                params::ORDER_BY => &mut parsed.order_by,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        parsed
    }

    /// Validate and decode. The order field is checked first, then the
    /// direction, then the page bounds; missing values default to zero or
    /// empty.
    pub fn into_query(self) -> Result<SearchQuery> {
        let raw_field = self.order_field.unwrap_or_default();
        let order_field: OrderField = raw_field
            .parse()
            .map_err(|_| ServerError::BadOrderField(raw_field.clone()))?;

        let order_by = match self.order_by {
            Some(raw) => raw
                .parse::<OrderBy>()
                .map_err(|_| ServerError::BadOrderBy(raw.clone()))?,
            None => OrderBy::AsIs,
        };

        Ok(SearchQuery {
            query: self.query.unwrap_or_default(),
            order_field,
            order_by,
            offset: parse_count("offset", self.offset)?,
            limit: parse_count("limit", self.limit)?,
        })
    }
}

fn parse_count(name: &str, raw: Option<String>) -> Result<usize> {
    match raw {
        None => Ok(0),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ServerError::BadRequest(format!("{name} must be a non-negative integer"))),
    }
}

/// GET /?query=&limit=&offset=&order_field=&order_by=
pub async fn search_users(
    State(app_state): State<AppState>,
    RawQuery(raw): RawQuery,
) -> Result<Json<Vec<User>>> {
    let params = SearchParams::from_query_string(raw.as_deref().unwrap_or_default());
    let query = params.into_query()?;
    let users = app_state.directory.search(&query)?;

    tracing::debug!(
        query = %query.query,
        order_field = %query.order_field,
        order_by = %query.order_by,
        offset = query.offset,
        limit = query.limit,
        rows = users.len(),
        "Search served"
    );

    Ok(Json(users))
}
