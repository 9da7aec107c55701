//! API Routes
//!
//! Configures the Axum router with the employee and operational endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_employee_handler, delete_employee_handler, get_employee_handler, health_handler,
    list_employees_handler, stats_handler, update_employee_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /employees` - List all employees
/// - `POST /employees` - Create an employee
/// - `GET /employees/:id` - Get an employee by id
/// - `PUT /employees/:id` - Rename an employee
/// - `DELETE /employees/:id` - Delete an employee
/// - `GET /stats` - Employees cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/employees",
            get(list_employees_handler).post(create_employee_handler),
        )
        .route(
            "/employees/:id",
            get(get_employee_handler)
                .put(update_employee_handler)
                .delete(delete_employee_handler),
        )
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
