//! Request DTOs with validation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use studio_entity::admin::{AdminPermission, AdminRole};
use studio_entity::booking::{BookingStatus, PackageTier, PaymentStatus, ServiceType};
use studio_entity::contact::{ContactPriority, ContactStatus, ContactSubject};

/// Staff registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Display name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Email address.
    #[validate(email(message = "Valid email is required"))]
    pub email: String,
    /// Plaintext password (hashed before storage).
    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub password: String,
    /// Role; defaults to `admin`.
    pub role: Option<AdminRole>,
    /// Contact phone number.
    pub phone: Option<String>,
    /// Granted permissions; defaults to none.
    pub permissions: Option<Vec<AdminPermission>>,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Own-profile update request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    /// New display name.
    pub name: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
}

/// Password change request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    /// Current password.
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,
    /// New password.
    #[validate(length(min = 6, message = "Password must be at least 6 characters long"))]
    pub new_password: String,
}

/// Staff account update request (super-admin management).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateAdminRequest {
    /// New display name.
    pub name: Option<String>,
    /// New email address.
    #[validate(email(message = "Valid email is required"))]
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

/// Public booking submission body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateBookingRequest {
    #[validate(length(min = 1, message = "Customer name is required"))]
    pub customer_name: String,
    #[validate(email(message = "Valid email is required"))]
    pub customer_email: String,
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub customer_phone: String,
    pub service_type: ServiceType,
    pub package: PackageTier,
    /// Session day, `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Session start, `HH:MM`.
    #[validate(length(min = 1, message = "Time is required"))]
    pub time: String,
    /// Session length in hours; defaults to 1.
    #[validate(range(min = 1, message = "Duration must be at least one hour"))]
    pub duration_hours: Option<i32>,
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "State is required"))]
    pub state: String,
    #[validate(length(min = 1, message = "Postal code is required"))]
    pub postal_code: String,
    pub price_amount: Decimal,
    /// ISO currency code; defaults to USD.
    pub price_currency: Option<String>,
    /// Discount; defaults to zero.
    pub price_discount: Option<Decimal>,
    pub special_requirements: Option<String>,
}

/// Staff booking edit body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateBookingRequest {
    pub customer_name: Option<String>,
    #[validate(email(message = "Valid email is required"))]
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub service_type: Option<ServiceType>,
    pub package: Option<PackageTier>,
    pub date: Option<NaiveDate>,
    /// `HH:MM`.
    pub time: Option<String>,
    #[validate(range(min = 1, message = "Duration must be at least one hour"))]
    pub duration_hours: Option<i32>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub price_amount: Option<Decimal>,
    pub price_discount: Option<Decimal>,
    pub payment_status: Option<PaymentStatus>,
    pub special_requirements: Option<String>,
}

/// Booking status transition body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateBookingStatusRequest {
    pub status: BookingStatus,
    /// Recorded when cancelling.
    pub cancellation_reason: Option<String>,
}

/// Reschedule request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RescheduleRequest {
    /// Target day, `YYYY-MM-DD`.
    pub new_date: NaiveDate,
    /// Target start, `HH:MM`.
    #[validate(length(min = 1, message = "New time is required"))]
    pub new_time: String,
    /// Reason recorded on the original booking.
    pub reason: Option<String>,
}

/// Photographer assignment body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AssignPhotographerRequest {
    pub photographer_id: Uuid,
}

/// Note creation body (bookings and contacts).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddNoteRequest {
    #[validate(length(min = 1, message = "Note content is required"))]
    pub content: String,
}

/// Public contact form submission body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateContactRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Valid email is required"))]
    pub email: String,
    pub phone: Option<String>,
    pub subject: ContactSubject,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

/// Staff contact triage edit body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateContactRequest {
    pub status: Option<ContactStatus>,
    pub priority: Option<ContactPriority>,
    pub assigned_to: Option<Uuid>,
}

/// Contact assignment body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AssignContactRequest {
    pub admin_id: Uuid,
}

/// Bulk contact triage body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BulkUpdateContactsRequest {
    #[validate(length(min = 1, message = "Contact IDs are required"))]
    pub contact_ids: Vec<Uuid>,
    pub status: Option<ContactStatus>,
    pub priority: Option<ContactPriority>,
    pub assigned_to: Option<Uuid>,
}

/// Query string for the availability endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AvailableSlotsQuery {
    /// `YYYY-MM-DD`.
    pub date: NaiveDate,
}

/// Query string for booking listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingListQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub status: Option<BookingStatus>,
    pub service_type: Option<ServiceType>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub search: Option<String>,
}

/// Query string for contact listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactListQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub status: Option<ContactStatus>,
    pub priority: Option<ContactPriority>,
    pub subject: Option<ContactSubject>,
    pub unread_only: Option<bool>,
    pub search: Option<String>,
}

/// Query string for staff account listings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdminListQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    pub role: Option<AdminRole>,
    pub search: Option<String>,
}
