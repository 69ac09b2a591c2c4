//! Booking lifecycle and payment status enumerations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a booking.
///
/// The forward path is `pending -> confirmed -> in_progress -> completed`;
/// any non-terminal state may move to `cancelled` or `rescheduled`.
/// `completed`, `cancelled`, and `rescheduled` are terminal — a reschedule
/// continues on the linked successor record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "booking_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Awaiting staff confirmation.
    Pending,
    /// Confirmed by staff.
    Confirmed,
    /// Session is underway.
    InProgress,
    /// Session finished.
    Completed,
    /// Cancelled; the slot is released.
    Cancelled,
    /// Moved to a new slot; a successor record carries the booking on.
    Rescheduled,
}

impl BookingStatus {
    /// Whether no further status changes are allowed from this state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled | Self::Rescheduled)
    }

    /// Whether a transition from `self` to `next` is legal.
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        if self.is_terminal() {
            return false;
        }
        match next {
            BookingStatus::Cancelled | BookingStatus::Rescheduled => true,
            BookingStatus::Confirmed => *self == Self::Pending,
            BookingStatus::InProgress => *self == Self::Confirmed,
            BookingStatus::Completed => *self == Self::InProgress,
            BookingStatus::Pending => false,
        }
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::Rescheduled => "rescheduled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = studio_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            "rescheduled" => Ok(Self::Rescheduled),
            _ => Err(studio_core::AppError::validation(format!(
                "Invalid booking status: '{s}'"
            ))),
        }
    }
}

/// Payment status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "payment_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Not yet paid.
    Pending,
    /// Fully paid.
    Paid,
    /// Payment returned to the customer.
    Refunded,
}

impl PaymentStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Refunded => "refunded",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_path() {
        assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Confirmed));
        assert!(BookingStatus::Confirmed.can_transition_to(BookingStatus::InProgress));
        assert!(BookingStatus::InProgress.can_transition_to(BookingStatus::Completed));
        assert!(!BookingStatus::Pending.can_transition_to(BookingStatus::Completed));
    }

    #[test]
    fn test_cancel_from_any_non_terminal() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::InProgress,
        ] {
            assert!(status.can_transition_to(BookingStatus::Cancelled));
            assert!(status.can_transition_to(BookingStatus::Rescheduled));
        }
    }

    #[test]
    fn test_terminal_states_are_frozen() {
        for status in [
            BookingStatus::Completed,
            BookingStatus::Cancelled,
            BookingStatus::Rescheduled,
        ] {
            assert!(status.is_terminal());
            assert!(!status.can_transition_to(BookingStatus::Pending));
            assert!(!status.can_transition_to(BookingStatus::Cancelled));
        }
    }
}
