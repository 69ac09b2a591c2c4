//! Role gate helpers for protected operations.
//!
//! Every protected handler runs behind the access gate (which resolves
//! the acting staff account); these helpers enforce the operation's role
//! requirement on top of that. Failures are `Forbidden`, distinct from
//! the gate's `Unauthorized`.

use studio_core::error::AppError;
use studio_entity::admin::{AdminPermission, AdminRole};

/// Checks that the caller's role is within the allowed set.
pub fn require_role(role: AdminRole, allowed: &[AdminRole]) -> Result<(), AppError> {
    if allowed.contains(&role) {
        Ok(())
    } else {
        Err(AppError::forbidden("Insufficient permissions"))
    }
}

/// Checks that the caller is a super admin.
pub fn require_super_admin(role: AdminRole) -> Result<(), AppError> {
    require_role(role, &[AdminRole::SuperAdmin])
}

/// Checks that the caller holds the given permission.
///
/// Super admins implicitly hold every permission.
pub fn require_permission(
    role: AdminRole,
    granted: &[AdminPermission],
    needed: AdminPermission,
) -> Result<(), AppError> {
    if role.is_super_admin() || granted.contains(&needed) {
        Ok(())
    } else {
        Err(AppError::forbidden("Insufficient permissions"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_core::error::ErrorKind;

    #[test]
    fn test_role_gate() {
        assert!(require_role(AdminRole::Admin, &[AdminRole::Admin, AdminRole::SuperAdmin]).is_ok());
        let err = require_super_admin(AdminRole::Admin).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
        assert!(require_super_admin(AdminRole::SuperAdmin).is_ok());
    }

    #[test]
    fn test_permission_gate() {
        let granted = vec![AdminPermission::ManageBookings];
        assert!(
            require_permission(AdminRole::Admin, &granted, AdminPermission::ManageBookings).is_ok()
        );
        assert!(
            require_permission(AdminRole::Admin, &granted, AdminPermission::ManageAdmins).is_err()
        );
        // Super admins bypass the granted set.
        assert!(
            require_permission(AdminRole::SuperAdmin, &[], AdminPermission::ManageAdmins).is_ok()
        );
    }
}
