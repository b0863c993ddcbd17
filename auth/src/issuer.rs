use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;

/// Lifetime of access tokens when no other window is configured.
pub const DEFAULT_VALIDITY_MINUTES: i64 = 15;

/// Longest validity window a deployment may configure (one year).
pub const MAX_VALIDITY_MINUTES: i64 = 60 * 24 * 365;

/// Signs time-limited bearer tokens with a shared secret.
///
/// Construction fails on an empty secret, so a misconfigured service is
/// rejected once at startup rather than on every login.
pub struct TokenIssuer {
    jwt_handler: JwtHandler,
}

/// A freshly signed token and the instant it stops being accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl TokenIssuer {
    /// Create an issuer bound to `secret`.
    ///
    /// # Errors
    /// * `MissingSecret` - `secret` is empty
    pub fn new(secret: &[u8]) -> Result<Self, JwtError> {
        if secret.is_empty() {
            return Err(JwtError::MissingSecret);
        }

        Ok(Self {
            jwt_handler: JwtHandler::new(secret),
        })
    }

    /// Sign `claims`, stamping issuance time now and expiry
    /// `validity_minutes` later. Any `iat`/`exp` already on `claims` is
    /// overwritten.
    ///
    /// # Errors
    /// * `InvalidValidityWindow` - Expiry is not representable
    /// * `EncodingFailed` - Token signing failed
    pub fn issue(&self, claims: Claims, validity_minutes: i64) -> Result<IssuedToken, JwtError> {
        let issued_at = Utc::now();
        let expires_at = Duration::try_minutes(validity_minutes)
            .and_then(|validity| issued_at.checked_add_signed(validity))
            .ok_or(JwtError::InvalidValidityWindow(validity_minutes))?;

        let claims = claims
            .with_issued_at(issued_at.timestamp())
            .with_expiration(expires_at.timestamp());

        let token = self.jwt_handler.encode(&claims)?;

        // Second precision, matching what the token itself carries.
        let expires_at = claims.expires_at().unwrap_or(expires_at);

        Ok(IssuedToken { token, expires_at })
    }

    /// Verify signature and expiry of `token` and return its claims.
    ///
    /// Tokens without an `exp` claim are rejected: nothing this issuer signs
    /// lacks one.
    ///
    /// # Errors
    /// * `TokenExpired` - Token is past its expiry
    /// * `DecodingFailed` - Signature mismatch, malformed token, or no `exp`
    pub fn validate(&self, token: &str) -> Result<Claims, JwtError> {
        self.jwt_handler.decode_expiring(token)
    }
}

/// Sign `claims` with `secret` for `validity_minutes`.
///
/// One-shot form of [`TokenIssuer::issue`] for callers that do not keep an
/// issuer around.
pub fn issue(
    secret: &[u8],
    claims: Claims,
    validity_minutes: i64,
) -> Result<IssuedToken, JwtError> {
    TokenIssuer::new(secret)?.issue(claims, validity_minutes)
}
