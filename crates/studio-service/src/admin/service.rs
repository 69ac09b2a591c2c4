//! Staff account service — registration, login, profile, and
//! super-admin account management.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use studio_auth::jwt::issuer::{IssuedToken, TokenIssuer};
use studio_auth::password::{PasswordHasher, PasswordPolicy};
use studio_core::error::AppError;
use studio_core::result::AppResult;
use studio_core::types::pagination::{PageRequest, PageResponse};
use studio_database::repositories::admin::{AdminFilter, AdminRepository};
use studio_entity::admin::{Admin, AdminPermission, AdminRole, CreateAdmin, UpdateAdmin};

use crate::context::RequestContext;
use crate::report::aggregate::{self, AdminOverview};

/// Result of a successful registration or login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginOutcome {
    /// The authenticated staff account.
    pub admin: Admin,
    /// The issued session token.
    pub token: IssuedToken,
}

/// Handles staff credentials and account management.
#[derive(Debug, Clone)]
pub struct AdminService {
    /// Staff repository.
    admin_repo: Arc<AdminRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy.
    policy: PasswordPolicy,
    /// Session token issuer.
    issuer: Arc<TokenIssuer>,
}

impl AdminService {
    /// Creates a new staff account service.
    pub fn new(
        admin_repo: Arc<AdminRepository>,
        hasher: Arc<PasswordHasher>,
        policy: PasswordPolicy,
        issuer: Arc<TokenIssuer>,
    ) -> Self {
        Self {
            admin_repo,
            hasher,
            policy,
            issuer,
        }
    }

    /// Registers a new staff account and issues a session token.
    ///
    /// Fails with a conflict when the email is already registered
    /// (case-insensitive). The plaintext password is hashed immediately
    /// and never stored or logged.
    pub async fn register(
        &self,
        name: String,
        email: String,
        password: &str,
        role: AdminRole,
        permissions: Vec<AdminPermission>,
        phone: Option<String>,
    ) -> AppResult<LoginOutcome> {
        self.policy.validate(password)?;

        if self.admin_repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("Admin with this email already exists"));
        }

        let password_hash = self.hasher.hash_password(password)?;
        let admin = self
            .admin_repo
            .create(&CreateAdmin {
                name,
                email,
                password_hash,
                phone,
                role,
                permissions,
            })
            .await?;

        info!(admin_id = %admin.id, role = %admin.role, "Admin registered");

        let token = self.issuer.issue(admin.id, &admin.email, admin.role)?;
        Ok(LoginOutcome { admin, token })
    }

    /// Authenticates a staff account and issues a session token.
    ///
    /// Unknown email and wrong password return the same message so the
    /// endpoint cannot be used to enumerate accounts.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginOutcome> {
        let admin = self
            .admin_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::unauthorized("Invalid credentials"))?;

        if !admin.is_active {
            return Err(AppError::unauthorized("Account is deactivated"));
        }

        let valid = self
            .hasher
            .verify_password(password, &admin.password_hash)?;
        if !valid {
            return Err(AppError::unauthorized("Invalid credentials"));
        }

        self.admin_repo.update_last_login(admin.id).await?;
        info!(admin_id = %admin.id, "Admin logged in");

        let token = self.issuer.issue(admin.id, &admin.email, admin.role)?;
        let admin = self
            .admin_repo
            .find_by_id(admin.id)
            .await?
            .ok_or_else(|| AppError::internal("Admin vanished during login"))?;

        Ok(LoginOutcome { admin, token })
    }

    /// Loads the acting account's full profile.
    pub async fn get_profile(&self, ctx: &RequestContext) -> AppResult<Admin> {
        self.admin_repo
            .find_by_id(ctx.admin_id)
            .await?
            .ok_or_else(|| AppError::not_found("Admin not found"))
    }

    /// Updates the acting account's own profile fields.
    pub async fn update_profile(
        &self,
        ctx: &RequestContext,
        name: Option<String>,
        phone: Option<String>,
    ) -> AppResult<Admin> {
        if let Some(name) = &name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Name cannot be empty"));
            }
        }

        self.admin_repo
            .update(
                ctx.admin_id,
                &UpdateAdmin {
                    name,
                    phone,
                    ..UpdateAdmin::default()
                },
            )
            .await
    }

    /// Changes the acting account's password after verifying the current
    /// one.
    pub async fn change_password(
        &self,
        ctx: &RequestContext,
        current_password: &str,
        new_password: &str,
    ) -> AppResult<()> {
        let admin = self.get_profile(ctx).await?;

        let valid = self
            .hasher
            .verify_password(current_password, &admin.password_hash)?;
        if !valid {
            return Err(AppError::validation("Current password is incorrect"));
        }

        self.policy.validate(new_password)?;

        let new_hash = self.hasher.hash_password(new_password)?;
        self.admin_repo
            .update_password(ctx.admin_id, &new_hash)
            .await?;

        info!(admin_id = %ctx.admin_id, "Password changed");
        Ok(())
    }

    /// Lists staff accounts (super-admin management).
    pub async fn list(
        &self,
        filter: &AdminFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Admin>> {
        self.admin_repo.list(filter, page).await
    }

    /// Loads a staff account by ID.
    pub async fn get(&self, id: Uuid) -> AppResult<Admin> {
        self.admin_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Admin not found"))
    }

    /// Updates a staff account (super-admin management).
    pub async fn update(&self, id: Uuid, data: UpdateAdmin) -> AppResult<Admin> {
        self.ensure_exists(id).await?;
        self.admin_repo.update(id, &data).await
    }

    /// Deletes a staff account. Self-deletion is rejected.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> AppResult<()> {
        if id == ctx.admin_id {
            return Err(AppError::validation("Cannot delete your own account"));
        }
        if !self.admin_repo.delete(id).await? {
            return Err(AppError::not_found("Admin not found"));
        }
        info!(admin_id = %id, deleted_by = %ctx.admin_id, "Admin deleted");
        Ok(())
    }

    /// Computes the staff statistics overview from a full snapshot.
    pub async fn stats(&self) -> AppResult<AdminOverview> {
        let admins = self.admin_repo.snapshot().await?;
        Ok(aggregate::admin_overview(&admins))
    }

    async fn ensure_exists(&self, id: Uuid) -> AppResult<()> {
        self.admin_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Admin not found"))?;
        Ok(())
    }
}
