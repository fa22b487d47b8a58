use crate::features::investments::handlers;
use crate::features::investments::services::CommitmentService;
use axum::{routing::get, Router};
use std::sync::Arc;

/// Investment routes (require JWT authentication)
pub fn routes(service: Arc<CommitmentService>) -> Router {
    Router::new()
        .route(
            "/api/investments",
            get(handlers::list_my_investments).post(handlers::create_investment),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{
        admin_user, entrepreneur_user, investor_user, lazy_pool, with_user,
    };
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rust_decimal::Decimal;
    use serde_json::json;
    use uuid::Uuid;

    fn service() -> Arc<CommitmentService> {
        Arc::new(CommitmentService::new(lazy_pool(), Decimal::from(5)))
    }

    #[tokio::test]
    async fn test_only_investors_can_invest() {
        for user in [admin_user(), entrepreneur_user()] {
            let server = TestServer::new(with_user(routes(service()), user)).unwrap();
            let response = server
                .post("/api/investments")
                .json(&json!({ "project_id": Uuid::new_v4(), "amount": "1000" }))
                .await;
            response.assert_status(StatusCode::FORBIDDEN);
        }
    }

    #[tokio::test]
    async fn test_investment_requires_authentication() {
        let server = TestServer::new(routes(service())).unwrap();
        server
            .post("/api/investments")
            .json(&json!({ "project_id": Uuid::new_v4(), "amount": "1000" }))
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_negative_amount_is_rejected() {
        let server = TestServer::new(with_user(routes(service()), investor_user())).unwrap();
        let response = server
            .post("/api/investments")
            .json(&json!({ "project_id": Uuid::new_v4(), "amount": "-5" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_missing_project_id_is_rejected() {
        let server = TestServer::new(with_user(routes(service()), investor_user())).unwrap();
        server
            .post("/api/investments")
            .json(&json!({ "amount": "1000" }))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}
