//! Pagination-related DTOs for API requests and responses.

use serde::{Deserialize, Serialize};

fn default_limit() -> i64 {
    100
}

/// Skip/limit query parameters for list endpoints.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PaginationParams {
    /// Number of records to skip
    #[serde(default)]
    pub skip: i64,

    /// Maximum number of records to return (capped at 1000)
    #[serde(default = "default_limit")]
    pub limit: i64,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: default_limit(),
        }
    }
}

impl PaginationParams {
    /// Clamps the parameters before they reach the queries:
    /// skip to >= 0 and limit to [1, 1000].
    pub fn normalize(mut self) -> Self {
        self.skip = self.skip.max(0);
        self.limit = self.limit.clamp(1, 1000);
        self
    }
}

/// Generic paged response wrapper.
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    /// The records for this page
    pub items: Vec<T>,

    /// Total number of records under the same filter
    pub total: i64,

    /// Number of records skipped
    pub skip: i64,

    /// Page size used for the query
    pub limit: i64,
}

impl<T> PaginatedResponse<T> {
    /// Creates a new paged response from normalized parameters.
    pub fn new(items: Vec<T>, total: i64, params: &PaginationParams) -> Self {
        Self {
            items,
            total,
            skip: params.skip,
            limit: params.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_clamps_negative_skip() {
        let params = PaginationParams {
            skip: -5,
            limit: 100,
        }
        .normalize();
        assert_eq!(params.skip, 0);
    }

    #[test]
    fn test_normalize_clamps_limit_bounds() {
        let low = PaginationParams { skip: 0, limit: 0 }.normalize();
        assert_eq!(low.limit, 1);

        let high = PaginationParams {
            skip: 0,
            limit: 5000,
        }
        .normalize();
        assert_eq!(high.limit, 1000);
    }

    #[test]
    fn test_defaults() {
        let params = PaginationParams::default();
        assert_eq!(params.skip, 0);
        assert_eq!(params.limit, 100);
    }

    #[test]
    fn test_paged_response_shape() {
        let params = PaginationParams { skip: 10, limit: 20 }.normalize();
        let page = PaginatedResponse::new(vec![1, 2, 3], 53, &params);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["total"], 53);
        assert_eq!(json["skip"], 10);
        assert_eq!(json["limit"], 20);
        assert_eq!(json["items"].as_array().unwrap().len(), 3);
    }
}
