//! Session token encoding, decoding, and claims management.

pub mod claims;
pub mod issuer;
pub mod verifier;

pub use claims::Claims;
pub use issuer::{IssuedToken, TokenIssuer};
pub use verifier::TokenVerifier;
