//! Contact subject category enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category an inquiry is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "contact_subject", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ContactSubject {
    General,
    Booking,
    Pricing,
    Service,
    Support,
}

impl ContactSubject {
    /// Return the subject as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Booking => "booking",
            Self::Pricing => "pricing",
            Self::Service => "service",
            Self::Support => "support",
        }
    }
}

impl fmt::Display for ContactSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
