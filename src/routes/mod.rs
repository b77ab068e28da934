pub mod health;
pub mod hello;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
#[openapi(
    paths(health::health, hello::hello),
    components(schemas(health::HealthResponse, hello::HelloResponse)),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "hello", description = "Greeting endpoints"),
    ),
    info(
        title = "Demo1 API",
        description = "Static health and greeting endpoints for demo1-471009",
        version = "0.1.0"
    )
)]
struct ApiDoc;

/// Assemble the application router.
///
/// Unmatched paths and unsupported methods fall through to axum's default
/// 404/405 handling.
pub fn build_router() -> Router {
    // OpenAPI documentation
    let docs_routes = Router::new().merge(Scalar::with_url("/docs", ApiDoc::openapi()));

    Router::new()
        .route("/health", get(health::health))
        .route("/hello", get(hello::hello))
        .merge(docs_routes)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}
