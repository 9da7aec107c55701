//! API Handlers
//!
//! HTTP request handlers, one per employee service operation plus the
//! operational endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::cache::CacheRegion;
use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::models::{Employee, HealthResponse, StatsResponse};
use crate::service::EmployeeService;
use crate::store::{EmployeeRepository, InMemoryEmployeeRepository};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cache-aside employee service
    pub service: EmployeeService,
}

impl AppState {
    pub fn new(service: EmployeeService) -> Self {
        Self { service }
    }

    /// Builds the state over a given store, with the cache sized from config.
    pub fn with_repository(repository: Arc<dyn EmployeeRepository>, config: &Config) -> Self {
        let cache = CacheRegion::from_config(config);
        Self::new(EmployeeService::new(repository, cache))
    }

    /// Builds the state over a fresh in-memory store.
    pub fn from_config(config: &Config) -> Self {
        Self::with_repository(Arc::new(InMemoryEmployeeRepository::new()), config)
    }
}

/// Handler for GET /employees
pub async fn list_employees_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<Employee>>> {
    let employees = state.service.get_all().await?;
    Ok(Json(employees))
}

/// Handler for GET /employees/:id
///
/// Responds 404 with an empty body when the employee does not exist.
pub async fn get_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Employee>> {
    state
        .service
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// Handler for POST /employees
pub async fn create_employee_handler(
    State(state): State<AppState>,
    Json(employee): Json<Employee>,
) -> ApiResult<(StatusCode, Json<Employee>)> {
    let created = state.service.save(employee).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Handler for PUT /employees/:id
///
/// An unknown id surfaces as a 500, not a 404: the service reports it as a
/// generic failure and it is passed through untranslated.
pub async fn update_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(employee): Json<Employee>,
) -> ApiResult<Json<Employee>> {
    let updated = state.service.update(id, employee).await?;
    Ok(Json(updated))
}

/// Handler for DELETE /employees/:id
pub async fn delete_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    state.service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /stats
///
/// Returns statistics of the employees cache region.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.service.cache();
    let stats = cache.stats().await;
    Json(StatsResponse::new(cache.name(), &stats))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
