//! Authentication utilities library
//!
//! - Password hashing (Argon2id)
//! - JWT token encoding and validation
//! - Issuing short-lived bearer tokens
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Issuing Tokens
//! ```
//! use auth::{Claims, TokenIssuer, DEFAULT_VALIDITY_MINUTES};
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!").unwrap();
//! let issued = issuer
//!     .issue(Claims::for_subject(42), DEFAULT_VALIDITY_MINUTES)
//!     .unwrap();
//!
//! let decoded = issuer.validate(&issued.token).unwrap();
//! assert_eq!(decoded.sub.as_deref(), Some("42"));
//! ```

pub mod issuer;
pub mod jwt;
pub mod password;

pub use issuer::issue;
pub use issuer::IssuedToken;
pub use issuer::TokenIssuer;
pub use issuer::DEFAULT_VALIDITY_MINUTES;
pub use issuer::MAX_VALIDITY_MINUTES;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
