//! Staff account use cases.

pub mod service;

pub use service::{AdminService, LoginOutcome};
