//! Sort allow-list for product listings.
//!
//! The list endpoint accepts a sort token of the form `[-]field`. Only the
//! fields named here may be used as the sort key; anything else falls back
//! to `created_at` descending.

use catalog_core::types::SortDirection;

/// Product columns accepted as sort keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSortKey {
    Name,
    Price,
    CreatedAt,
    UpdatedAt,
}

impl ProductSortKey {
    /// Parse a bare field name against the allow-list.
    pub fn parse(field: &str) -> Option<Self> {
        match field {
            "name" => Some(Self::Name),
            "price" => Some(Self::Price),
            "created_at" => Some(Self::CreatedAt),
            "updated_at" => Some(Self::UpdatedAt),
            _ => None,
        }
    }

    /// Return the column name for this key.
    pub fn column(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Price => "price",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }
}

/// A validated product sort: an allow-listed key plus direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductSort {
    /// Sort key.
    pub key: ProductSortKey,
    /// Sort direction.
    pub direction: SortDirection,
}

impl Default for ProductSort {
    fn default() -> Self {
        Self {
            key: ProductSortKey::CreatedAt,
            direction: SortDirection::Desc,
        }
    }
}

impl ProductSort {
    /// Parse a `[-]field` token. A leading `-` means descending. Tokens
    /// outside the allow-list fall back to the default sort.
    pub fn parse(token: &str) -> Self {
        let (direction, field) = match token.strip_prefix('-') {
            Some(rest) => (SortDirection::Desc, rest),
            None => (SortDirection::Asc, token),
        };
        match ProductSortKey::parse(field) {
            Some(key) => Self { key, direction },
            None => Self::default(),
        }
    }

    /// Render the `ORDER BY` fragment for this sort.
    pub fn as_order_by(&self) -> String {
        format!("{} {}", self.key.column(), self.direction.as_sql())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_dash_means_descending() {
        let sort = ProductSort::parse("-price");
        assert_eq!(sort.key, ProductSortKey::Price);
        assert_eq!(sort.direction, SortDirection::Desc);
    }

    #[test]
    fn bare_field_means_ascending() {
        let sort = ProductSort::parse("name");
        assert_eq!(sort.key, ProductSortKey::Name);
        assert_eq!(sort.direction, SortDirection::Asc);
    }

    #[test]
    fn unknown_field_falls_back_to_default() {
        let sort = ProductSort::parse("owner_id; DROP TABLE products");
        assert_eq!(sort, ProductSort::default());
        assert_eq!(sort.as_order_by(), "created_at DESC");
    }

    #[test]
    fn default_is_created_at_descending() {
        assert_eq!(ProductSort::default().as_order_by(), "created_at DESC");
    }
}
