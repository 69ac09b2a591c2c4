//! Application state shared across all handlers and extractors.

use std::sync::Arc;

use sqlx::PgPool;

use studio_auth::jwt::issuer::TokenIssuer;
use studio_auth::jwt::verifier::TokenVerifier;
use studio_auth::password::{PasswordHasher, PasswordPolicy};
use studio_core::config::AppConfig;
use studio_database::repositories::admin::AdminRepository;
use studio_database::repositories::booking::BookingRepository;
use studio_database::repositories::contact::ContactRepository;
use studio_service::admin::AdminService;
use studio_service::booking::BookingService;
use studio_service::contact::ContactService;
use studio_service::report::DashboardService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool.
    pub db_pool: PgPool,
    /// Session token verifier (used by the access gate).
    pub token_verifier: Arc<TokenVerifier>,
    /// Staff repository (used by the access gate's re-load).
    pub admin_repo: Arc<AdminRepository>,
    /// Staff account service.
    pub admin_service: Arc<AdminService>,
    /// Booking service.
    pub booking_service: Arc<BookingService>,
    /// Contact service.
    pub contact_service: Arc<ContactService>,
    /// Dashboard service.
    pub dashboard_service: Arc<DashboardService>,
}

impl AppState {
    /// Wires repositories, auth primitives, and services from the
    /// configuration and a connected pool.
    pub fn new(config: AppConfig, db_pool: PgPool) -> Self {
        let admin_repo = Arc::new(AdminRepository::new(db_pool.clone()));
        let booking_repo = Arc::new(BookingRepository::new(db_pool.clone()));
        let contact_repo = Arc::new(ContactRepository::new(db_pool.clone()));

        let hasher = Arc::new(PasswordHasher::new());
        let policy = PasswordPolicy::new(&config.auth);
        let issuer = Arc::new(TokenIssuer::new(&config.auth));
        let token_verifier = Arc::new(TokenVerifier::new(&config.auth));

        let admin_service = Arc::new(AdminService::new(
            Arc::clone(&admin_repo),
            hasher,
            policy,
            issuer,
        ));
        let booking_service = Arc::new(BookingService::new(
            Arc::clone(&booking_repo),
            Arc::clone(&admin_repo),
            config.scheduling.clone(),
        ));
        let contact_service = Arc::new(ContactService::new(
            Arc::clone(&contact_repo),
            Arc::clone(&admin_repo),
        ));
        let dashboard_service = Arc::new(DashboardService::new(
            Arc::clone(&booking_repo),
            Arc::clone(&contact_repo),
        ));

        Self {
            config: Arc::new(config),
            db_pool,
            token_verifier,
            admin_repo,
            admin_service,
            booking_service,
            contact_service,
            dashboard_service,
        }
    }
}
