//! # studio-service
//!
//! Business logic service layer for Meridian Studio. Each service
//! orchestrates repositories and authentication primitives to implement
//! application-level use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod admin;
pub mod booking;
pub mod contact;
pub mod context;
pub mod report;

pub use admin::AdminService;
pub use booking::BookingService;
pub use contact::ContactService;
pub use context::RequestContext;
pub use report::DashboardService;
