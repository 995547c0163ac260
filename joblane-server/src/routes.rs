use axum::{
    Json, Router,
    http::HeaderValue,
    middleware,
    routing::{delete, get, post, put},
};
use joblane_model::Role;
use serde_json::{Value, json};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auth::{self, middleware::require_role};
use crate::infra::app_state::AppState;
use crate::infra::config::CorsConfig;
use crate::jobs::{admin_handlers, handlers};

const EMPLOYER_ONLY: &[Role] = &[Role::Employer];
const CANDIDATE_ONLY: &[Role] = &[Role::Candidate];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

/// Assemble the full application router.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors);

    Router::new()
        // Public endpoints
        .route("/health", get(health))
        .route("/register", post(auth::handlers::register))
        .route("/login", post(auth::handlers::login))
        .merge(listing_routes(state.clone()))
        .merge(employer_routes(state.clone()))
        .merge(candidate_routes(state.clone()))
        .merge(admin_routes(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Listing is public, but authenticated callers get role-based visibility,
/// so the optional variant of the auth middleware runs in front.
fn listing_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/jobs", get(handlers::list_jobs))
        .route_layer(middleware::from_fn_with_state(
            state,
            auth::middleware::optional_auth_middleware,
        ))
}

fn employer_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/jobs", post(handlers::create_job))
        .route("/jobs/{id}", put(handlers::update_job))
        .route("/jobs/{id}", delete(handlers::delete_job))
        // Layers run outermost-last: authentication first, then the role gate.
        .route_layer(middleware::from_fn(require_role(EMPLOYER_ONLY)))
        .route_layer(middleware::from_fn_with_state(
            state,
            auth::middleware::auth_middleware,
        ))
}

fn candidate_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/jobs/{id}/apply", post(handlers::apply_to_job))
        .route_layer(middleware::from_fn(require_role(CANDIDATE_ONLY)))
        .route_layer(middleware::from_fn_with_state(
            state,
            auth::middleware::auth_middleware,
        ))
}

fn admin_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/admin/jobs/{id}", put(admin_handlers::update_job_status))
        .route_layer(middleware::from_fn(require_role(ADMIN_ONLY)))
        .route_layer(middleware::from_fn_with_state(
            state,
            auth::middleware::auth_middleware,
        ))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    if config.is_wildcard_included() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
