use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::features::reports::handlers;
use crate::features::reports::services::ReportService;

/// Flag submission for any authenticated user
pub fn routes(report_service: Arc<ReportService>) -> Router {
    Router::new()
        .route("/api/reports", post(handlers::create_report))
        .with_state(report_service)
}

/// Flag review routes, nested under `/api/admin`
pub fn admin_routes(report_service: Arc<ReportService>) -> Router {
    Router::new()
        .route("/reports", get(handlers::list_reports))
        .route("/reports/{id}", patch(handlers::update_report_status))
        .with_state(report_service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{entrepreneur_user, lazy_pool, with_user};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;
    use uuid::Uuid;

    fn service() -> Arc<ReportService> {
        Arc::new(ReportService::new(lazy_pool()))
    }

    #[tokio::test]
    async fn test_report_requires_authentication() {
        let server = TestServer::new(routes(service())).unwrap();
        server
            .post("/api/reports")
            .json(&json!({ "project_id": Uuid::new_v4(), "reason": "spam" }))
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_blank_reason_is_rejected() {
        let server = TestServer::new(with_user(routes(service()), entrepreneur_user())).unwrap();
        server
            .post("/api/reports")
            .json(&json!({ "project_id": Uuid::new_v4(), "reason": "  " }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_flag_review_is_admin_only() {
        let router = Router::new().nest("/api/admin", admin_routes(service()));
        let server = TestServer::new(with_user(router, entrepreneur_user())).unwrap();

        server
            .get("/api/admin/reports")
            .await
            .assert_status(StatusCode::FORBIDDEN);
        server
            .patch(&format!("/api/admin/reports/{}", Uuid::new_v4()))
            .json(&json!({ "status": "resolved" }))
            .await
            .assert_status(StatusCode::FORBIDDEN);
    }
}
