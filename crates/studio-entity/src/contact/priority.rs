//! Contact priority enumeration and keyword-based derivation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Triage priority of an inquiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "contact_priority", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ContactPriority {
    Urgent,
    High,
    Medium,
    Low,
}

impl ContactPriority {
    /// Derive a priority from the inquiry text.
    ///
    /// Scanned once at creation time over subject + message:
    /// "urgent" wins over "important"; anything else is Medium.
    pub fn from_text(subject: &str, message: &str) -> Self {
        let text = format!("{subject} {message}").to_lowercase();
        if text.contains("urgent") {
            Self::Urgent
        } else if text.contains("important") {
            Self::High
        } else {
            Self::Medium
        }
    }

    /// Return the priority as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Urgent => "urgent",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for ContactPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgent_keyword() {
        assert_eq!(
            ContactPriority::from_text("Need photos", "This is URGENT, event is tomorrow"),
            ContactPriority::Urgent
        );
    }

    #[test]
    fn test_important_keyword() {
        assert_eq!(
            ContactPriority::from_text("Important question", "about pricing"),
            ContactPriority::High
        );
    }

    #[test]
    fn test_urgent_wins_over_important() {
        assert_eq!(
            ContactPriority::from_text("important", "but also urgent"),
            ContactPriority::Urgent
        );
    }

    #[test]
    fn test_default_is_medium() {
        assert_eq!(
            ContactPriority::from_text("Hello", "Just wondering about availability"),
            ContactPriority::Medium
        );
    }
}
