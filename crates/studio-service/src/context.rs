//! Request context carrying the authenticated staff account.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use studio_entity::admin::{Admin, AdminPermission, AdminRole};

/// Context for the current authenticated request.
///
/// Built by the access gate after it has re-loaded the staff account, so
/// the role and permission set here reflect the database, not stale
/// token claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The acting staff account's ID.
    pub admin_id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Current role.
    pub role: AdminRole,
    /// Current permission set.
    pub permissions: Vec<AdminPermission>,
}

impl RequestContext {
    /// Builds a context from a freshly loaded staff account.
    pub fn from_admin(admin: &Admin) -> Self {
        Self {
            admin_id: admin.id,
            name: admin.name.clone(),
            email: admin.email.clone(),
            role: admin.role,
            permissions: admin.permissions.clone(),
        }
    }

    /// Returns whether the acting account is a super admin.
    pub fn is_super_admin(&self) -> bool {
        self.role.is_super_admin()
    }
}
