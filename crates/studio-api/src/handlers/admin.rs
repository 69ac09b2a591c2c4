//! Admin handlers — dashboard, own profile, and super-admin account
//! management.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use studio_auth::rbac;
use studio_core::types::pagination::{PageRequest, PageResponse};
use studio_database::repositories::admin::AdminFilter;
use studio_entity::admin::UpdateAdmin;
use studio_service::report::aggregate::{AdminOverview, DashboardOverview};

use crate::dto::request::{
    AdminListQuery, ChangePasswordRequest, UpdateAdminRequest, UpdateProfileRequest,
};
use crate::dto::response::{AdminResponse, ApiResponse};
use crate::error::ApiError;
use crate::extractors::{ApiJson, AuthAdmin};
use crate::state::AppState;

/// GET /api/admin/dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    _auth: AuthAdmin,
) -> Result<Json<ApiResponse<DashboardOverview>>, ApiError> {
    let overview = state.dashboard_service.overview().await?;
    Ok(Json(ApiResponse::ok(overview)))
}

/// GET /api/admin/profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthAdmin,
) -> Result<Json<ApiResponse<AdminResponse>>, ApiError> {
    let admin = state.admin_service.get_profile(&auth.0).await?;
    Ok(Json(ApiResponse::ok(admin.into())))
}

/// PUT /api/admin/profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthAdmin,
    ApiJson(req): ApiJson<UpdateProfileRequest>,
) -> Result<Json<ApiResponse<AdminResponse>>, ApiError> {
    let admin = state
        .admin_service
        .update_profile(&auth.0, req.name, req.phone)
        .await?;
    Ok(Json(ApiResponse::with_message(
        "Profile updated successfully",
        admin.into(),
    )))
}

/// PUT /api/admin/change-password
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthAdmin,
    ApiJson(req): ApiJson<ChangePasswordRequest>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state
        .admin_service
        .change_password(&auth.0, &req.current_password, &req.new_password)
        .await?;
    Ok(Json(ApiResponse::message_only("Password changed successfully")))
}

/// GET /api/admin/stats
pub async fn stats(
    State(state): State<AppState>,
    _auth: AuthAdmin,
) -> Result<Json<ApiResponse<AdminOverview>>, ApiError> {
    let overview = state.admin_service.stats().await?;
    Ok(Json(ApiResponse::ok(overview)))
}

/// GET /api/admin/admins
pub async fn list_admins(
    State(state): State<AppState>,
    auth: AuthAdmin,
    Query(query): Query<AdminListQuery>,
) -> Result<Json<ApiResponse<PageResponse<AdminResponse>>>, ApiError> {
    rbac::require_super_admin(auth.role)?;

    let filter = AdminFilter {
        role: query.role,
        search: query.search,
    };
    let page = PageRequest::new(query.page.unwrap_or(1), query.limit.unwrap_or(10));

    let admins = state.admin_service.list(&filter, &page).await?;
    Ok(Json(ApiResponse::ok(admins.map(AdminResponse::from))))
}

/// GET /api/admin/admins/{id}
pub async fn get_admin(
    State(state): State<AppState>,
    auth: AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<AdminResponse>>, ApiError> {
    rbac::require_super_admin(auth.role)?;
    let admin = state.admin_service.get(id).await?;
    Ok(Json(ApiResponse::ok(admin.into())))
}

/// PUT /api/admin/admins/{id}
pub async fn update_admin(
    State(state): State<AppState>,
    auth: AuthAdmin,
    Path(id): Path<Uuid>,
    ApiJson(req): ApiJson<UpdateAdminRequest>,
) -> Result<Json<ApiResponse<AdminResponse>>, ApiError> {
    rbac::require_super_admin(auth.role)?;

    let admin = state
        .admin_service
        .update(
            id,
            UpdateAdmin {
                name: req.name,
                email: req.email,
                phone: req.phone,
                role: req.role,
                permissions: req.permissions,
                is_active: req.is_active,
            },
        )
        .await?;

    Ok(Json(ApiResponse::with_message(
        "Admin updated successfully",
        admin.into(),
    )))
}

/// DELETE /api/admin/admins/{id}
pub async fn delete_admin(
    State(state): State<AppState>,
    auth: AuthAdmin,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    rbac::require_super_admin(auth.role)?;
    state.admin_service.delete(&auth.0, id).await?;
    Ok(Json(ApiResponse::message_only("Admin deleted successfully")))
}
