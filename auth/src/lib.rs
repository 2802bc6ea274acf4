//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure for the session authority:
//! - Password hashing (Argon2id)
//! - JWT token encoding and validation
//! - Access/refresh token pair issuance
//!
//! The service defines its own domain types and adapts these implementations.
//! Claims carried in tokens are deliberately minimal: a subject, a role
//! literal, and the standard timestamps.
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
//! ## Token Pairs
//! ```
//! use auth::TokenIssuer;
//! use chrono::Duration;
//!
//! let issuer = TokenIssuer::new(
//!     b"secret_key_at_least_32_bytes_long!",
//!     Duration::seconds(20),
//!     Duration::days(7),
//! );
//!
//! // Login: mint both tokens
//! let pair = issuer.issue("user123", "MEMBER").unwrap();
//!
//! // Refresh: verify the inbound refresh token, then mint a new pair
//! let claims = issuer.verify(&pair.refresh_token).unwrap();
//! let rotated = issuer.issue(&claims.sub, &claims.role).unwrap();
//! assert!(!rotated.access_token.is_empty());
//! ```

pub mod jwt;
pub mod password;
pub mod session;

// Re-export commonly used items
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use session::SessionClaims;
pub use session::TokenIssuer;
pub use session::TokenPair;
