//! Booking use cases: creation with conflict checking, slot
//! availability, lifecycle transitions, and the reschedule workflow.

pub mod availability;
pub mod service;

pub use service::{BookingService, RescheduleOutcome};
