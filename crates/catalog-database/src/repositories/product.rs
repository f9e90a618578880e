//! Product repository implementation.
//!
//! Every operation is scoped by `owner_id`; a product belonging to another
//! user behaves exactly like a missing one.

use sqlx::PgPool;

use catalog_core::error::{AppError, ErrorKind};
use catalog_core::result::AppResult;
use catalog_core::types::pagination::{PageRequest, PageResponse};
use catalog_entity::product::{NewProduct, Product, ProductPatch, ProductSort};

/// Repository for owner-scoped product CRUD.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

impl ProductRepository {
    /// Create a new product repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new product for the given owner.
    pub async fn create(&self, owner_id: i64, data: &NewProduct) -> AppResult<Product> {
        sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, description, price, owner_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.price)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create product", e))
    }

    /// Find a product by primary key, scoped to its owner.
    pub async fn find_by_id_and_owner(
        &self,
        id: i64,
        owner_id: i64,
    ) -> AppResult<Option<Product>> {
        sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find product", e))
    }

    /// List an owner's products with pagination and an allow-listed sort.
    ///
    /// An out-of-range page yields an empty page, not an error.
    pub async fn list_by_owner(
        &self,
        owner_id: i64,
        page: &PageRequest,
        sort: ProductSort,
    ) -> AppResult<PageResponse<Product>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products WHERE owner_id = $1")
            .bind(owner_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count products", e)
            })?;

        // sort comes from the ProductSortKey allow-list, never from raw input
        let query = format!(
            "SELECT * FROM products WHERE owner_id = $1 ORDER BY {} LIMIT $2 OFFSET $3",
            sort.as_order_by()
        );

        let products = sqlx::query_as::<_, Product>(&query)
            .bind(owner_id)
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list products", e))?;

        Ok(PageResponse::new(products, page, total as u64))
    }

    /// Apply a partial update to an owner's product.
    ///
    /// Only supplied fields change; `updated_at` is refreshed. An empty
    /// patch issues no UPDATE and returns the row as-is, leaving
    /// `updated_at` untouched. Returns `None` when the product does not
    /// exist or is not owned by the caller.
    pub async fn update(
        &self,
        id: i64,
        owner_id: i64,
        patch: &ProductPatch,
    ) -> AppResult<Option<Product>> {
        if patch.is_empty() {
            return self.find_by_id_and_owner(id, owner_id).await;
        }

        sqlx::query_as::<_, Product>(
            "UPDATE products SET \
                 name = COALESCE($3, name), \
                 description = COALESCE($4, description), \
                 price = COALESCE($5, price), \
                 updated_at = NOW() \
             WHERE id = $1 AND owner_id = $2 \
             RETURNING *",
        )
        .bind(id)
        .bind(owner_id)
        .bind(patch.name.as_deref())
        .bind(patch.description.as_deref())
        .bind(patch.price)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update product", e))
    }

    /// Hard-delete an owner's product. Returns whether a row was removed.
    pub async fn delete(&self, id: i64, owner_id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete product", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
