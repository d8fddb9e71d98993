use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use service::product::repository::ProductRepository;
use service::product::ProductService;

pub mod products;

/// Shared handler state: the product service over its repository.
pub struct ServerState<R: ProductRepository> {
    pub products: Arc<ProductService<R>>,
}

// Manual impl: `derive(Clone)` would add an `R: Clone` bound.
impl<R: ProductRepository> Clone for ServerState<R> {
    fn clone(&self) -> Self {
        Self { products: Arc::clone(&self.products) }
    }
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: health plus the product CRUD routes.
pub fn build_router<R: ProductRepository + 'static>(
    cors: CorsLayer,
    state: ServerState<R>,
) -> Router {
    let api: Router<ServerState<R>> = Router::new()
        .route("/health", get(health))
        .route("/api/products", post(products::create))
        .route("/api/products/all", get(products::list))
        .route(
            "/api/products/:id",
            get(products::get).put(products::update).delete(products::remove),
        );

    api.with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
