use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower::ServiceBuilder;
use axum::extract::DefaultBodyLimit;

use crate::config::ServerConfig;
use super::handlers::*;

pub fn create_router(config: &ServerConfig) -> Router {
    Router::new()
        .route("/api/forward", get(get_forward))
        .route("/api/inverse", get(get_inverse))
        .route("/api/point", get(get_point))
        .route("/api/batch/forward", post(upload_forward_csv))
        .route("/api/batch/point", post(upload_point_csv))
        .layer(
            ServiceBuilder::new()
                .layer(DefaultBodyLimit::max(config.body_limit_bytes))
                .layer(CorsLayer::permissive())
        )
}
