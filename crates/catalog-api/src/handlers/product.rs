//! Product CRUD handlers.
//!
//! Every operation is scoped to the authenticated caller; a product owned
//! by someone else is indistinguishable from a missing one (404, never
//! 403).

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use rust_decimal::Decimal;

use catalog_core::error::AppError;
use catalog_core::types::ApiResponse;
use catalog_core::types::pagination::PageResponse;
use catalog_entity::product::NewProduct;

use crate::dto;
use crate::dto::request::{CreateProductRequest, UpdateProductRequest};
use crate::dto::response::ProductResponse;
use crate::error::ApiError;
use crate::extractors::{CurrentUser, ListParams};
use crate::state::AppState;

/// POST /api/products
pub async fn create_product(
    State(state): State<AppState>,
    auth: CurrentUser,
    Json(req): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ProductResponse>>), ApiError> {
    dto::validate(&req)?;

    let product = state
        .product_repo
        .create(
            auth.user_id,
            &NewProduct {
                name: req.name,
                description: req.description.unwrap_or_default(),
                price: req.price.unwrap_or(Decimal::ZERO),
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::created("Product created", product.into())),
    ))
}

/// GET /api/products
pub async fn list_products(
    State(state): State<AppState>,
    auth: CurrentUser,
    Query(params): Query<ListParams>,
) -> Result<Json<ApiResponse<PageResponse<ProductResponse>>>, ApiError> {
    let page = state
        .product_repo
        .list_by_owner(auth.user_id, &params.page_request(), params.product_sort())
        .await?
        .map(ProductResponse::from);

    Ok(Json(ApiResponse::ok("Products fetched", page)))
}

/// GET /api/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    auth: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<ProductResponse>>, ApiError> {
    let product = state
        .product_repo
        .find_by_id_and_owner(id, auth.user_id)
        .await?
        .ok_or_else(|| AppError::not_found("Not found"))?;

    Ok(Json(ApiResponse::ok("Product fetched", product.into())))
}

/// PUT /api/products/{id}
pub async fn update_product(
    State(state): State<AppState>,
    auth: CurrentUser,
    Path(id): Path<i64>,
    Json(req): Json<UpdateProductRequest>,
) -> Result<Json<ApiResponse<ProductResponse>>, ApiError> {
    dto::validate(&req)?;

    let product = state
        .product_repo
        .update(id, auth.user_id, &req.into_patch())
        .await?
        .ok_or_else(|| AppError::not_found("Not found"))?;

    Ok(Json(ApiResponse::ok("Product updated", product.into())))
}

/// DELETE /api/products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    auth: CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<serde_json::Value>>, ApiError> {
    let deleted = state.product_repo.delete(id, auth.user_id).await?;
    if !deleted {
        return Err(AppError::not_found("Not found").into());
    }

    Ok(Json(ApiResponse::success_empty(200, "Product deleted")))
}
