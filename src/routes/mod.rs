pub mod api;
pub mod health;
pub mod openapi;
pub mod pages;
pub mod user;

use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn_with_state,
    routing::{delete, get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use crate::middleware::{
    auth::require_bearer_auth,
    cors::cors_layer,
    rate_limit::{rps_middleware, RateLimiter},
};
use crate::AppState;

const BODY_LIMIT_BYTES: usize = 1024 * 1024;

/// Full application router: HTML pages, public JSON, and the bearer-protected
/// user API, each group behind its own rate limiter.
pub fn router(state: AppState) -> Router {
    let config = state.config.clone();

    let page_routes = Router::new()
        .route("/", get(pages::home))
        .route("/companies", get(pages::companies))
        .route("/companies/:id", get(pages::company_detail))
        .route(
            "/companies/:id/recruitments/:recruitment_id",
            get(pages::recruitment_detail),
        )
        .route(
            "/companies/:id/internships/:internship_id",
            get(pages::internship_detail),
        )
        .route("/internships", get(pages::internships))
        .route("/jobs", get(pages::jobs))
        .layer(from_fn_with_state(
            RateLimiter::new(config.public_rps),
            rps_middleware,
        ));

    let public_api = Router::new()
        .route("/api/companies", get(api::list_companies))
        .route("/api/companies/:id", get(api::get_company))
        .route("/api/internships", get(api::list_internships))
        .route("/api/recruitments", get(api::list_recruitments))
        .route("/api/openapi.json", get(openapi::openapi_json))
        .layer(from_fn_with_state(
            RateLimiter::new(config.public_rps),
            rps_middleware,
        ));

    let user_api = Router::new()
        .route("/api/auth/sync-user", post(user::sync_user))
        .route(
            "/api/user/profile",
            get(user::get_profile).patch(user::update_profile),
        )
        .route(
            "/api/user/favorites",
            get(user::list_favorites).post(user::add_favorite),
        )
        .route("/api/user/favorites/:id", delete(user::remove_favorite))
        .route(
            "/api/user/applications",
            get(user::list_applications).post(user::apply),
        )
        .route_layer(from_fn_with_state(
            state.verifier.clone(),
            require_bearer_auth,
        ))
        .layer(from_fn_with_state(
            RateLimiter::new(config.api_rps),
            rps_middleware,
        ));

    Router::new()
        .route("/health", get(health::health))
        .merge(page_routes)
        .merge(public_api)
        .merge(user_api)
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .fallback(pages::not_found)
        .with_state(state)
        .layer(cors_layer(&config.cors_origins))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
}
