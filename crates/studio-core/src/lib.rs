//! # studio-core
//!
//! Core crate for the Meridian Studio operations backend. Contains
//! configuration schemas, pagination types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other studio crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
