use crate::features::projects::handlers;
use crate::features::projects::services::{AggregationService, ProjectService};
use axum::{routing::get, Router};
use std::sync::Arc;

/// Public browse, detail and aggregate routes
pub fn public_routes(service: Arc<ProjectService>, aggregation: Arc<AggregationService>) -> Router {
    let projects = Router::new()
        .route("/api/projects", get(handlers::list_projects))
        .route("/api/projects/featured", get(handlers::list_featured_projects))
        .route(
            "/api/projects/filter-options",
            get(handlers::get_filter_options),
        )
        .route("/api/projects/{id}", get(handlers::get_project))
        .with_state(service);

    let aggregates = Router::new()
        .route(
            "/api/projects/aggregates",
            get(handlers::list_project_aggregates),
        )
        .route(
            "/api/projects/{id}/aggregate",
            get(handlers::get_project_aggregate),
        )
        .with_state(aggregation);

    projects.merge(aggregates)
}

/// Entrepreneur-owned project routes (require JWT authentication)
pub fn entrepreneur_routes(service: Arc<ProjectService>) -> Router {
    Router::new()
        .route(
            "/api/my/projects",
            get(handlers::list_my_projects).post(handlers::create_project),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{entrepreneur_user, investor_user, lazy_pool, with_user};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;

    fn project_service() -> Arc<ProjectService> {
        let pool = lazy_pool();
        let aggregation = Arc::new(AggregationService::new(pool.clone()));
        Arc::new(ProjectService::new(pool, aggregation, 6))
    }

    fn valid_project() -> serde_json::Value {
        json!({
            "title": "Solar Kiosk",
            "description": "Off-grid charging stations",
            "category": "Energy",
            "minimum_investment": "250.00",
            "reward_type": "equity",
            "reward_description": "Equity share",
            "media": [{ "type": "image", "url": "https://cdn.example.com/kiosk.png" }]
        })
    }

    #[tokio::test]
    async fn test_investor_cannot_create_project() {
        let server = TestServer::new(with_user(
            entrepreneur_routes(project_service()),
            investor_user(),
        ))
        .unwrap();

        let response = server.post("/api/my/projects").json(&valid_project()).await;
        response.assert_status(StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_create_project_without_media_is_rejected() {
        let server = TestServer::new(with_user(
            entrepreneur_routes(project_service()),
            entrepreneur_user(),
        ))
        .unwrap();

        let mut payload = valid_project();
        payload["media"] = json!([]);
        let response = server.post("/api/my/projects").json(&payload).await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_my_projects_requires_authentication() {
        let server = TestServer::new(entrepreneur_routes(project_service())).unwrap();
        server
            .get("/api/my/projects")
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_aggregates_rejects_malformed_ids() {
        let pool = lazy_pool();
        let server = TestServer::new(public_routes(
            project_service(),
            Arc::new(AggregationService::new(pool)),
        ))
        .unwrap();

        server
            .get("/api/projects/aggregates")
            .add_query_param("ids", "nope")
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        // missing `ids` parameter
        server
            .get("/api/projects/aggregates")
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_project_detail_rejects_non_uuid_path() {
        let pool = lazy_pool();
        let server = TestServer::new(public_routes(
            project_service(),
            Arc::new(AggregationService::new(pool)),
        ))
        .unwrap();

        server
            .get("/api/projects/not-a-uuid/aggregate")
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}
