//! Product CRUD handlers.
//!
//! Handlers only translate between HTTP and [`ProductManager`]; validation and
//! storage errors come back as [`AppError`] and are rendered there.
//!
//! [`ProductManager`]: catalog_core::product::ProductManager

use axum::{
    extract::{rejection::JsonRejection, OriginalUri, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use catalog_core::product::{Product, Sku};

use crate::{handlers::AppError, state::AppState};

/// List all products (GET /v1/products).
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = state.products.list_products().await?;
    Ok(Json(products))
}

/// Create a new product (POST /v1/products).
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<Product>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(product) = payload?;

    state.products.create_product(&product).await?;

    Ok((StatusCode::CREATED, Json(product)))
}

/// Get a single product by SKU (GET /v1/products/{id}).
pub async fn obtain_product(
    State(state): State<AppState>,
    Path(sku): Path<Sku>,
) -> Result<Json<Product>, AppError> {
    let product = state.products.obtain_product(&sku).await?;
    Ok(Json(product))
}

/// Replace a product by SKU (PUT /v1/products/{id}).
///
/// The body may leave `sku` out, in which case the one in the path is used.
pub async fn update_product(
    State(state): State<AppState>,
    Path(sku): Path<Sku>,
    payload: Result<Json<Product>, JsonRejection>,
) -> Result<Json<Product>, AppError> {
    let Json(mut product) = payload?;
    if product.sku.is_empty() {
        product.sku = sku.clone();
    }

    state.products.update_product(&sku, &product).await?;

    Ok(Json(product))
}

/// Delete a product by SKU (DELETE /v1/products/{id}).
pub async fn delete_product(
    State(state): State<AppState>,
    Path(sku): Path<Sku>,
) -> Result<impl IntoResponse, AppError> {
    state.products.delete_product(&sku).await?;
    Ok(Json(json!({ "message": "ok" })))
}

/// Fallback for unmatched paths.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": format!("path '{}' does not exist", uri.path()) })),
    )
}
