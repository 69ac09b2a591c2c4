//! Staff permission enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fine-grained permissions that can be granted to a staff account.
///
/// Super admins implicitly hold every permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "admin_permission", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AdminPermission {
    /// View and mutate bookings.
    ManageBookings,
    /// View and mutate contact inquiries.
    ManageContacts,
    /// Manage other staff accounts.
    ManageAdmins,
    /// View dashboard and statistics endpoints.
    ViewAnalytics,
    /// Change studio-wide settings.
    ManageSettings,
}

impl AdminPermission {
    /// Return the permission as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ManageBookings => "manage_bookings",
            Self::ManageContacts => "manage_contacts",
            Self::ManageAdmins => "manage_admins",
            Self::ViewAnalytics => "view_analytics",
            Self::ManageSettings => "manage_settings",
        }
    }
}

impl fmt::Display for AdminPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AdminPermission {
    type Err = studio_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "manage_bookings" => Ok(Self::ManageBookings),
            "manage_contacts" => Ok(Self::ManageContacts),
            "manage_admins" => Ok(Self::ManageAdmins),
            "view_analytics" => Ok(Self::ViewAnalytics),
            "manage_settings" => Ok(Self::ManageSettings),
            _ => Err(studio_core::AppError::validation(format!(
                "Invalid permission: '{s}'"
            ))),
        }
    }
}
