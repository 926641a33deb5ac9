pub mod catalog;
pub mod notifications;

use axum::{http::StatusCode, routing::get, Json, Router};
use models::{Course, Service};
use service::catalog::Catalog;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn metrics() -> (StatusCode, String) {
    common::metrics::encode_metrics()
}

/// Build the full application router: health, metrics and the admin catalog.
pub fn build_router(catalog: &Catalog, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics));

    let admin_routes = Router::new()
        .merge(catalog::routes::<Course>("/admin/courses", catalog.courses.clone()))
        .merge(catalog::routes::<Service>("/admin/services", catalog.services.clone()))
        .merge(notifications::routes(catalog.notifications.clone()));

    public
        .merge(admin_routes)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
