//! Response DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use studio_entity::admin::{Admin, AdminPermission, AdminRole};
use studio_entity::booking::{Booking, BookingNote};
use studio_entity::contact::{Contact, ContactNote};

/// Standard success envelope: `{success, message?, data?}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Optional human-readable message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Response data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response with data.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// Creates a successful response with a message and data.
    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Creates a successful response carrying only a message.
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// Staff account summary (never carries the password hash).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: AdminRole,
    pub permissions: Vec<AdminPermission>,
    pub is_active: bool,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Admin> for AdminResponse {
    fn from(admin: Admin) -> Self {
        Self {
            id: admin.id,
            name: admin.name,
            email: admin.email,
            phone: admin.phone,
            role: admin.role,
            permissions: admin.permissions,
            is_active: admin.is_active,
            last_login_at: admin.last_login_at,
            created_at: admin.created_at,
        }
    }
}

/// Registration/login response payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The issued session token.
    pub token: String,
    /// Token expiration.
    pub expires_at: DateTime<Utc>,
    /// The authenticated account.
    pub admin: AdminResponse,
}

/// Availability listing payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableSlotsResponse {
    /// The requested day.
    pub date: NaiveDate,
    /// Open slot start times, chronological, `HH:MM`.
    pub available_slots: Vec<String>,
}

/// A booking with its notes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingDetailResponse {
    pub booking: Booking,
    pub notes: Vec<BookingNote>,
}

/// Reschedule result payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RescheduleResponse {
    /// The original booking, now `rescheduled`.
    pub original_booking: Booking,
    /// The pending successor booking.
    pub new_booking: Booking,
}

/// An inquiry with its notes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactDetailResponse {
    pub contact: Contact,
    pub notes: Vec<ContactNote>,
}

/// Bulk update result payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkUpdateResponse {
    /// Number of inquiries touched.
    pub modified_count: u64,
}

/// Health check payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Database connectivity.
    pub database: String,
}
