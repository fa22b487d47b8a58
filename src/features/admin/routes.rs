use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::admin::handlers;
use crate::features::admin::services::{AdminService, ApprovalService};
use crate::features::projects::services::ProjectService;

/// Create admin routes (all require the admin role). Nested under `/api/admin`.
pub fn routes(
    admin_service: Arc<AdminService>,
    approval_service: Arc<ApprovalService>,
    project_service: Arc<ProjectService>,
) -> Router {
    let console = Router::new()
        .route("/users", get(handlers::list_users))
        .route("/stats", get(handlers::get_stats))
        .route("/activity", get(handlers::get_activity))
        .with_state(admin_service);

    let review = Router::new()
        .route("/projects", get(handlers::list_projects_for_review))
        .with_state(project_service);

    let decisions = Router::new()
        .route("/projects/{id}/approve", post(handlers::approve_project))
        .route("/projects/{id}/reject", post(handlers::reject_project))
        .route("/projects/{id}/feature", post(handlers::toggle_featured))
        .with_state(approval_service);

    console.merge(review).merge(decisions)
}
