//! Contact inquiry status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Workflow status of an inquiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "contact_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ContactStatus {
    /// Submitted, not yet seen by staff.
    New,
    /// Seen by staff.
    Read,
    /// A reply has been sent.
    Replied,
    /// No further action expected.
    Closed,
    /// Flagged as spam.
    Spam,
}

impl ContactStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Read => "read",
            Self::Replied => "replied",
            Self::Closed => "closed",
            Self::Spam => "spam",
        }
    }
}

impl fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ContactStatus {
    type Err = studio_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "new" => Ok(Self::New),
            "read" => Ok(Self::Read),
            "replied" => Ok(Self::Replied),
            "closed" => Ok(Self::Closed),
            "spam" => Ok(Self::Spam),
            _ => Err(studio_core::AppError::validation(format!(
                "Invalid contact status: '{s}'"
            ))),
        }
    }
}
