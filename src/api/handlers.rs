use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::logic::{GraphLoader, GraphSerializer, ResponseShaper};
use crate::model::{CompanyResponse, Response};
use crate::store::traits::Store;

pub type AppState<S> = Arc<S>;

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

fn internal_error(e: anyhow::Error) -> (StatusCode, Json<ErrorResponse>) {
    log::error!("Store query failed: {:#}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(&e.to_string())),
    )
}

/// Returns the eagerly loaded entity graph as-is.
///
/// Don't do this. Employees point back at their company, so writing the graph
/// as JSON runs into a cycle and the request fails.
pub async fn oops<S: Store>(State(store): State<AppState<S>>) -> ApiResult<Value> {
    log::debug!("GET /oops");
    let companies = GraphLoader::load_companies_with_employees(&*store)
        .await
        .map_err(internal_error)?;

    match GraphSerializer::to_value(&companies) {
        Ok(value) => Ok(Json(value)),
        Err(e) => {
            log::warn!("Refusing to serialize entity graph: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(&e.to_string())),
            ))
        }
    }
}

/// Ad-hoc projection: only the selected fields end up in the response
pub async fn projection_anon<S: Store>(State(store): State<AppState<S>>) -> ApiResult<Vec<Value>> {
    log::debug!("GET /projection-anon");
    ResponseShaper::projection_anon(&*store)
        .await
        .map(Json)
        .map_err(internal_error)
}

/// Same projection wrapped in an object, leaving room for metadata next to `results`
pub async fn projection_anon_wrapper<S: Store>(
    State(store): State<AppState<S>>,
) -> ApiResult<Value> {
    log::debug!("GET /projection-anon-wrapper");
    ResponseShaper::projection_anon_wrapper(&*store)
        .await
        .map(Json)
        .map_err(internal_error)
}

pub async fn projection_type_wrapper<S: Store>(
    State(store): State<AppState<S>>,
) -> ApiResult<Response<CompanyResponse>> {
    log::debug!("GET /projection-type-wrapper");
    ResponseShaper::projection_type_wrapper(&*store)
        .await
        .map(Json)
        .map_err(internal_error)
}
