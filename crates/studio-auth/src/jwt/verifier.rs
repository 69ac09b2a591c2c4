//! Stateless session token verification.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use studio_core::config::AuthConfig;
use studio_core::error::AppError;

use super::claims::Claims;

/// Validates session tokens.
///
/// Verification is a pure cryptographic operation — there is no
/// revocation list. Deactivated accounts are rejected by the access
/// gate's admin re-load, not here.
#[derive(Clone)]
pub struct TokenVerifier {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenVerifier {
    /// Creates a new verifier from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a session token string.
    ///
    /// Checks signature validity and expiration. Expired tokens and
    /// malformed/forged tokens produce distinct messages, both mapped to
    /// an unauthorized error.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::unauthorized("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::unauthorized("Invalid token signature")
                    }
                    _ => AppError::unauthorized("Invalid token"),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::issuer::TokenIssuer;
    use studio_core::config::AuthConfig;
    use studio_entity::admin::AdminRole;
    use uuid::Uuid;

    fn config(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            ..AuthConfig::default()
        }
    }

    #[test]
    fn test_issue_verify_round_trip() {
        let config = config("test-secret");
        let issuer = TokenIssuer::new(&config);
        let verifier = TokenVerifier::new(&config);

        let admin_id = Uuid::new_v4();
        let issued = issuer
            .issue(admin_id, "admin@example.com", AdminRole::SuperAdmin)
            .unwrap();

        let claims = verifier.verify(&issued.token).unwrap();
        assert_eq!(claims.admin_id(), admin_id);
        assert_eq!(claims.email, "admin@example.com");
        assert_eq!(claims.role, AdminRole::SuperAdmin);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = TokenIssuer::new(&config("secret-a"));
        let verifier = TokenVerifier::new(&config("secret-b"));

        let issued = issuer
            .issue(Uuid::new_v4(), "admin@example.com", AdminRole::Admin)
            .unwrap();

        let err = verifier.verify(&issued.token).unwrap_err();
        assert_eq!(err.kind, studio_core::error::ErrorKind::Unauthorized);
    }

    #[test]
    fn test_garbage_token_rejected() {
        let verifier = TokenVerifier::new(&config("test-secret"));
        assert!(verifier.verify("not-a-token").is_err());
    }
}
