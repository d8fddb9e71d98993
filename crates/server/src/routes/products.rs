use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use service::product::domain::Product;
use service::product::repository::ProductRepository;

use crate::errors::JsonApiError;
use crate::routes::ServerState;

pub async fn create<R: ProductRepository>(
    State(state): State<ServerState<R>>,
    Json(input): Json<Product>,
) -> Result<(StatusCode, Json<Product>), JsonApiError> {
    let created = state.products.create(input).await?;
    info!(id = ?created.id, name = %created.name, "created product");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list<R: ProductRepository>(
    State(state): State<ServerState<R>>,
) -> Result<Json<Vec<Product>>, JsonApiError> {
    let products = state.products.list().await?;
    info!(count = products.len(), "list products");
    Ok(Json(products))
}

pub async fn get<R: ProductRepository>(
    State(state): State<ServerState<R>>,
    Path(id): Path<i32>,
) -> Result<Json<Product>, JsonApiError> {
    let product = state.products.get(id).await?;
    Ok(Json(product))
}

pub async fn update<R: ProductRepository>(
    State(state): State<ServerState<R>>,
    Path(id): Path<i32>,
    Json(input): Json<Product>,
) -> Result<Json<Product>, JsonApiError> {
    let updated = state.products.update(id, input).await?;
    info!(id, "updated product");
    Ok(Json(updated))
}

pub async fn remove<R: ProductRepository>(
    State(state): State<ServerState<R>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, JsonApiError> {
    state.products.delete(id).await?;
    info!(id, "deleted product");
    Ok(StatusCode::NO_CONTENT)
}
