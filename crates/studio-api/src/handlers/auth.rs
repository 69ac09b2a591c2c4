//! Auth handlers — register, login, me.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use studio_entity::admin::AdminRole;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{AdminResponse, ApiResponse, AuthResponse};
use crate::error::ApiError;
use crate::extractors::{ApiJson, AuthAdmin};
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AuthResponse>>), ApiError> {
    let outcome = state
        .admin_service
        .register(
            req.name,
            req.email,
            &req.password,
            req.role.unwrap_or(AdminRole::Admin),
            req.permissions.unwrap_or_default(),
            req.phone,
        )
        .await?;

    let body = AuthResponse {
        token: outcome.token.token,
        expires_at: outcome.token.expires_at,
        admin: outcome.admin.into(),
    };

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Admin registered successfully", body)),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    let outcome = state.admin_service.login(&req.email, &req.password).await?;

    let body = AuthResponse {
        token: outcome.token.token,
        expires_at: outcome.token.expires_at,
        admin: outcome.admin.into(),
    };

    Ok(Json(ApiResponse::with_message("Login successful", body)))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthAdmin,
) -> Result<Json<ApiResponse<AdminResponse>>, ApiError> {
    let admin = state.admin_service.get_profile(&auth.0).await?;
    Ok(Json(ApiResponse::ok(admin.into())))
}
