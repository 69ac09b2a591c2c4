//! Staff account entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::permission::AdminPermission;
use super::role::AdminRole;

/// A staff account with role-scoped access to management endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Admin {
    /// Unique account identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address (unique, compared case-insensitively).
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Account role.
    pub role: AdminRole,
    /// Granted permissions.
    pub permissions: Vec<AdminPermission>,
    /// Whether the account may authenticate. Deactivated accounts keep
    /// their row but fail the access gate even with a valid token.
    pub is_active: bool,
    /// Last successful login time.
    pub last_login_at: Option<DateTime<Utc>>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Admin {
    /// Check whether this account holds the given permission.
    ///
    /// Super admins implicitly hold every permission.
    pub fn has_permission(&self, permission: AdminPermission) -> bool {
        self.role.is_super_admin() || self.permissions.contains(&permission)
    }
}

/// Data required to create a new staff account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAdmin {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Assigned role.
    pub role: AdminRole,
    /// Granted permissions.
    pub permissions: Vec<AdminPermission>,
}

/// Data for updating an existing staff account (super-admin management).
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAdmin {
    /// New display name.
    pub name: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// New role.
    pub role: Option<AdminRole>,
    /// Replacement permission set.
    pub permissions: Option<Vec<AdminPermission>>,
    /// New active flag.
    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin(role: AdminRole, permissions: Vec<AdminPermission>) -> Admin {
        Admin {
            id: Uuid::new_v4(),
            name: "Test Admin".to_string(),
            email: "admin@example.com".to_string(),
            password_hash: "x".to_string(),
            phone: None,
            role,
            permissions,
            is_active: true,
            last_login_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_super_admin_has_all_permissions() {
        let a = admin(AdminRole::SuperAdmin, Vec::new());
        assert!(a.has_permission(AdminPermission::ManageAdmins));
        assert!(a.has_permission(AdminPermission::ManageSettings));
    }

    #[test]
    fn test_admin_permissions_are_explicit() {
        let a = admin(AdminRole::Admin, vec![AdminPermission::ManageBookings]);
        assert!(a.has_permission(AdminPermission::ManageBookings));
        assert!(!a.has_permission(AdminPermission::ManageAdmins));
    }
}
