use crate::{AppState, api, health};

use axum::{
    Router,
    routing::{get, patch, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/api/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Workspace
        .route("/api/workspace", get(api::workspace::workspace::get_workspace))
        // Projects
        .route(
            "/api/projects",
            get(api::projects::projects::list_projects)
                .post(api::projects::projects::create_project),
        )
        .route(
            "/api/projects/{id}",
            get(api::projects::projects::get_project)
                .patch(api::projects::projects::update_project)
                .delete(api::projects::projects::delete_project),
        )
        .route(
            "/api/projects/{id}/sync",
            post(api::projects::projects::sync_project),
        )
        // Tasks
        .route(
            "/api/tasks",
            get(api::tasks::tasks::list_tasks).post(api::tasks::tasks::create_task),
        )
        .route(
            "/api/tasks/{id}",
            patch(api::tasks::tasks::update_task).delete(api::tasks::tasks::delete_task),
        )
        // Team
        .route(
            "/api/team",
            get(api::team::team::list_team_members).post(api::team::team::create_team_member),
        )
        .route(
            "/api/team/{id}",
            patch(api::team::team::update_team_member)
                .delete(api::team::team::delete_team_member),
        )
        // Add shared state
        .with_state(state)
        // The browser client is served from another origin
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
