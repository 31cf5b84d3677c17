use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers;
use crate::store::traits::Store;

pub fn create_router<S: Store + 'static>() -> Router<Arc<S>> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Returning the entity graph directly (fails on the cycle)
        .route("/oops", get(handlers::oops::<S>))
        // Projections
        .route("/projection-anon", get(handlers::projection_anon::<S>))
        .route(
            "/projection-anon-wrapper",
            get(handlers::projection_anon_wrapper::<S>),
        )
        .route(
            "/projection-type-wrapper",
            get(handlers::projection_type_wrapper::<S>),
        )
}
