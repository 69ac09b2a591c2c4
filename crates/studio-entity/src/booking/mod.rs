//! Booking domain entities.

pub mod catalog;
pub mod model;
pub mod status;

pub use catalog::{PackageTier, ServiceType};
pub use model::{Booking, BookingNote, CreateBooking, UpdateBooking};
pub use status::{BookingStatus, PaymentStatus};
