use crate::features::users::handlers::profile_handler;
use crate::features::users::services::UserService;
use axum::{
    routing::{patch, put},
    Router,
};
use std::sync::Arc;

pub fn routes(service: Arc<UserService>) -> Router {
    Router::new()
        .route("/api/users/me", patch(profile_handler::update_profile))
        .route(
            "/api/users/me/password",
            put(profile_handler::change_password),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{lazy_pool, with_user, investor_user};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    fn server(authenticated: bool) -> TestServer {
        let router = routes(Arc::new(UserService::new(lazy_pool())));
        let router = if authenticated {
            with_user(router, investor_user())
        } else {
            router
        };
        TestServer::new(router).unwrap()
    }

    #[tokio::test]
    async fn test_update_profile_requires_authentication() {
        let response = server(false)
            .patch("/api/users/me")
            .json(&json!({ "name": "Ada" }))
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_update_profile_rejects_empty_name() {
        let response = server(true)
            .patch("/api/users/me")
            .json(&json!({ "name": "" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_change_password_rejects_short_password() {
        let response = server(true)
            .put("/api/users/me/password")
            .json(&json!({ "current_password": "old-password", "new_password": "short" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        let response = server(true)
            .patch("/api/users/me")
            .content_type("application/json")
            .text("{ not json")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
    }
}
