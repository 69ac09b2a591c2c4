//! Repository implementations for all Meridian Studio entities.

pub mod admin;
pub mod booking;
pub mod contact;

pub use admin::{AdminFilter, AdminRepository};
pub use booking::{BookingFilter, BookingRepository};
pub use contact::{BulkContactUpdate, ContactFilter, ContactRepository};
