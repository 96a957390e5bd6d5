//! HTTP surface: routes, shared state and error mapping.

/// Error type returned by every handler
pub mod error;
/// Route handlers grouped by resource
pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::database::repository::ProjectRepository;
use crate::services::clock::Clock;
use handlers::{daily_logs, health, projects, time};

/// State shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Project and daily log storage.
    pub repo: Arc<dyn ProjectRepository>,
    /// Source of "now" for timestamps and default dates.
    pub clock: Arc<dyn Clock>,
    /// When the service was built, for uptime reporting.
    pub start_time: DateTime<Utc>,
}

/// The assembled API router.
pub struct ApiService {
    /// Router with state, CORS and request tracing applied.
    pub router: Router,
}

impl ApiService {
    /// Builds the router over the given store and clock.
    pub fn new(repo: Arc<dyn ProjectRepository>, clock: Arc<dyn Clock>) -> Self {
        let state = AppState {
            repo,
            start_time: clock.now(),
            clock,
        };

        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let router = Router::new()
            .route("/api/health", get(health::health_check))
            .route("/api/timezones", get(time::list_timezones))
            .route("/api/time", post(time::current_times))
            .route(
                "/api/projects",
                get(projects::list_projects).post(projects::create_project),
            )
            .route("/api/projects/:project_id", get(projects::get_project))
            .route(
                "/api/projects/:project_id/daily-logs",
                get(daily_logs::list_daily_logs).post(daily_logs::create_daily_log),
            )
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(cors),
            )
            .with_state(state);

        Self { router }
    }
}
