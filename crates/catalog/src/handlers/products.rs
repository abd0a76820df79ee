//! Product CRUD handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use catalog_core::product::{
    validate_new_product, validate_patch, NewProduct, Product, ProductError, ProductPatch,
};
use catalog_core::storage::{RepositoryError, PRODUCT_ENTITY};

use crate::handlers::error::{AppError, BadRequest};
use crate::state::AppState;

fn not_found(id: String) -> AppError {
    RepositoryError::NotFound {
        entity_type: PRODUCT_ENTITY,
        id,
    }
    .into()
}

fn parse_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| BadRequest(rejection.body_text()).into())
}

fn invalid(err: ProductError) -> AppError {
    BadRequest(err.to_string()).into()
}

/// Create a new product (POST /products).
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<NewProduct>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let new_product = parse_body(payload)?;
    validate_new_product(&new_product).map_err(invalid)?;
    tracing::debug!(payload = ?new_product, "Received create product request");

    let product = state.product_repo.create(new_product).await?;
    tracing::info!(product_id = %product.id, "Created product");

    Ok((StatusCode::CREATED, Json(product)))
}

/// List all products (GET /products).
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, AppError> {
    let products = state.product_repo.get_all().await?;
    Ok(Json(products))
}

/// Get a single product by ID (GET /products/{id}).
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, AppError> {
    match state.product_repo.get_by_id(&id).await? {
        Some(product) => Ok(Json(product)),
        None => Err(not_found(id)),
    }
}

/// Partially update a product (PUT /products/{id}).
///
/// Only the fields present in the body are written. Unknown keys are ignored.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ProductPatch>, JsonRejection>,
) -> Result<Json<Product>, AppError> {
    let patch = parse_body(payload)?;
    validate_patch(&patch).map_err(invalid)?;
    tracing::debug!(product_id = %id, patch = ?patch, "Received update product request");

    match state.product_repo.update(&id, patch).await? {
        Some(product) => {
            tracing::info!(product_id = %id, "Updated product");
            Ok(Json(product))
        }
        None => Err(not_found(id)),
    }
}

/// Delete a product (DELETE /products/{id}).
///
/// Succeeds whether or not the product existed.
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.product_repo.delete(&id).await?;
    tracing::info!(product_id = %id, "Deleted product");

    Ok(StatusCode::NO_CONTENT)
}
