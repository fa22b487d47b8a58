use axum::{routing::get, Router};
use std::sync::Arc;

use crate::features::dashboard::handlers;
use crate::features::dashboard::services::DashboardService;

/// Create public dashboard routes
pub fn routes(dashboard_service: Arc<DashboardService>) -> Router {
    Router::new()
        .route("/api/stats", get(handlers::get_stats))
        .with_state(dashboard_service)
}
