//! Pagination and sorting query parameters for the list endpoint.

use serde::{Deserialize, Serialize};

use catalog_core::types::pagination::PageRequest;
use catalog_entity::product::ProductSort;

/// Query parameters for `GET /api/products`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListParams {
    /// Page number (1-based, default: 1).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page (default: 10, max: 100).
    #[serde(default = "default_per_page")]
    pub per_page: u64,
    /// Sort token of the form `[-]field` (default: `-created_at`).
    #[serde(default = "default_sort")]
    pub sort: String,
}

fn default_page() -> u64 {
    1
}

fn default_per_page() -> u64 {
    10
}

fn default_sort() -> String {
    "-created_at".to_string()
}

impl ListParams {
    /// Clamped page request.
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.per_page)
    }

    /// Parsed, allow-listed sort.
    pub fn product_sort(&self) -> ProductSort {
        ProductSort::parse(&self.sort)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_list_endpoint_contract() {
        let params: ListParams = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(params.page, 1);
        assert_eq!(params.per_page, 10);
        assert_eq!(params.product_sort().as_order_by(), "created_at DESC");
    }

    #[test]
    fn oversized_per_page_is_clamped() {
        let params: ListParams =
            serde_json::from_value(serde_json::json!({"per_page": 101})).unwrap();
        assert_eq!(params.page_request().per_page, 100);
    }
}
