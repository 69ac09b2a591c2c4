//! # studio-api
//!
//! HTTP API layer for Meridian Studio built on Axum.
//!
//! Provides all REST endpoints, the bearer-token access gate, request
//! DTOs with validation, CORS, and error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
