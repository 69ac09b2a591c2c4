//! Route definitions for the studio HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState`
//! and passes it to all handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{delete, get, patch, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(booking_routes())
        .merge(contact_routes())
        .merge(admin_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);
    let max_body = state.config.server.max_body_size_bytes;

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Auth endpoints: register, login, me.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/me", get(handlers::auth::me))
}

/// Booking endpoints. Creation and availability are public; the rest
/// require auth via the `AuthAdmin` extractor.
fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/bookings", post(handlers::booking::create))
        .route(
            "/bookings/available-slots",
            get(handlers::booking::available_slots),
        )
        .route("/bookings", get(handlers::booking::list))
        .route("/bookings/stats/overview", get(handlers::booking::stats))
        .route("/bookings/{id}", get(handlers::booking::get))
        .route("/bookings/{id}", put(handlers::booking::update))
        .route("/bookings/{id}", delete(handlers::booking::delete))
        .route(
            "/bookings/{id}/status",
            patch(handlers::booking::update_status),
        )
        .route(
            "/bookings/{id}/reschedule",
            patch(handlers::booking::reschedule),
        )
        .route(
            "/bookings/{id}/assign-photographer",
            patch(handlers::booking::assign_photographer),
        )
        .route("/bookings/{id}/notes", post(handlers::booking::add_note))
}

/// Contact endpoints. Submission is public (with optional auth); the
/// rest require auth.
fn contact_routes() -> Router<AppState> {
    Router::new()
        .route("/contact", post(handlers::contact::create))
        .route("/contact", get(handlers::contact::list))
        .route("/contact/unread", get(handlers::contact::unread))
        .route("/contact/stats/overview", get(handlers::contact::stats))
        .route("/contact/bulk-update", patch(handlers::contact::bulk_update))
        .route("/contact/{id}", get(handlers::contact::get))
        .route("/contact/{id}", put(handlers::contact::update))
        .route("/contact/{id}", delete(handlers::contact::delete))
        .route("/contact/{id}/mark-read", patch(handlers::contact::mark_read))
        .route(
            "/contact/{id}/mark-replied",
            patch(handlers::contact::mark_replied),
        )
        .route("/contact/{id}/mark-spam", patch(handlers::contact::mark_spam))
        .route("/contact/{id}/assign", patch(handlers::contact::assign))
        .route("/contact/{id}/notes", post(handlers::contact::add_note))
}

/// Admin endpoints: dashboard, own profile, account management
/// (management routes additionally require the super-admin role).
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/dashboard", get(handlers::admin::dashboard))
        .route("/admin/profile", get(handlers::admin::get_profile))
        .route("/admin/profile", put(handlers::admin::update_profile))
        .route(
            "/admin/change-password",
            put(handlers::admin::change_password),
        )
        .route("/admin/stats", get(handlers::admin::stats))
        .route("/admin/admins", get(handlers::admin::list_admins))
        .route("/admin/admins/{id}", get(handlers::admin::get_admin))
        .route("/admin/admins/{id}", put(handlers::admin::update_admin))
        .route("/admin/admins/{id}", delete(handlers::admin::delete_admin))
}

/// Health endpoint.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
