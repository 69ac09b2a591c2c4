//! Staff role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available to staff accounts.
///
/// `SuperAdmin` can additionally manage other staff accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "admin_role", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AdminRole {
    /// Regular staff member with access to bookings and contacts.
    Admin,
    /// Full administrator; can also manage other staff accounts.
    SuperAdmin,
}

impl AdminRole {
    /// Check if this role can manage other staff accounts.
    pub fn is_super_admin(&self) -> bool {
        matches!(self, Self::SuperAdmin)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::SuperAdmin => "super_admin",
        }
    }
}

impl fmt::Display for AdminRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AdminRole {
    type Err = studio_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "super_admin" => Ok(Self::SuperAdmin),
            _ => Err(studio_core::AppError::validation(format!(
                "Invalid admin role: '{s}'. Expected one of: admin, super_admin"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("admin".parse::<AdminRole>().unwrap(), AdminRole::Admin);
        assert_eq!(
            "SUPER_ADMIN".parse::<AdminRole>().unwrap(),
            AdminRole::SuperAdmin
        );
        assert!("root".parse::<AdminRole>().is_err());
    }

    #[test]
    fn test_super_admin_check() {
        assert!(AdminRole::SuperAdmin.is_super_admin());
        assert!(!AdminRole::Admin.is_super_admin());
    }
}
