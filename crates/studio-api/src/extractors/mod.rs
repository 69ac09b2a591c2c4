//! Request extractors: the bearer-token access gate and validated JSON.

pub mod auth;
pub mod json;

pub use auth::{AuthAdmin, MaybeAuthAdmin};
pub use json::ApiJson;
