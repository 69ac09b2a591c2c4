//! Access gate extractors.
//!
//! `AuthAdmin` pulls the bearer token from the Authorization header,
//! verifies it, and re-loads the staff account. The re-load rejects
//! deactivated accounts whose tokens are still cryptographically valid —
//! tokens are not individually revocable, so this check is what makes
//! deactivation take effect.

use axum::RequestPartsExt;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;

use studio_core::error::AppError;
use studio_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated staff context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthAdmin(pub RequestContext);

impl std::ops::Deref for AuthAdmin {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let ctx = resolve_admin(parts, state).await?;
        Ok(AuthAdmin(ctx))
    }
}

/// Optional-auth variant: attaches the staff context when a valid token
/// is present, proceeds unauthenticated otherwise. Never rejects.
#[derive(Debug, Clone)]
pub struct MaybeAuthAdmin(pub Option<RequestContext>);

impl FromRequestParts<AppState> for MaybeAuthAdmin {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuthAdmin(resolve_admin(parts, state).await.ok()))
    }
}

async fn resolve_admin(
    parts: &mut Parts,
    state: &AppState,
) -> Result<RequestContext, ApiError> {
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| ApiError(AppError::unauthorized("Access token required")))?;

    let claims = state.token_verifier.verify(bearer.token())?;

    let admin = state
        .admin_repo
        .find_by_id(claims.admin_id())
        .await?
        .filter(|admin| admin.is_active)
        .ok_or_else(|| AppError::unauthorized("Invalid or inactive admin account"))?;

    Ok(RequestContext::from_admin(&admin))
}
