use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::jwt::JwtError;
use crate::jwt::JwtHandler;

/// Claims carried by both access and refresh tokens.
///
/// The payload is intentionally minimal: subject identity and role, plus the
/// standard timestamps and a random token id so two tokens minted for the
/// same identity are never byte-identical.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionClaims {
    /// Subject (user identifier)
    pub sub: String,

    /// Role literal (`ADMIN` / `MEMBER`)
    pub role: String,

    /// Unique token identifier
    pub jti: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl SessionClaims {
    /// Build claims for a subject/role pair expiring `ttl` from now.
    pub fn new(subject: &str, role: &str, ttl: Duration) -> Self {
        let now = Utc::now();

        Self {
            sub: subject.to_string(),
            role: role.to_string(),
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }
}

/// A freshly minted access/refresh token pair.
///
/// The access token goes in the response body; the refresh token must only
/// ever travel inside the designated HTTP-only cookie.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Mints and verifies session token pairs.
///
/// Both tokens are signed with the same process-wide secret and carry the
/// same claim shape; they differ only in lifetime. Rotating the secret
/// invalidates all outstanding tokens, which is the only revocation
/// mechanism available.
pub struct TokenIssuer {
    jwt_handler: JwtHandler,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenIssuer {
    /// Create a token issuer.
    ///
    /// # Arguments
    /// * `secret` - HS256 signing secret
    /// * `access_ttl` - Access token lifetime (short, forces frequent refresh)
    /// * `refresh_ttl` - Refresh token lifetime (long, cookie-bound)
    pub fn new(secret: &[u8], access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            jwt_handler: JwtHandler::new(secret),
            access_ttl,
            refresh_ttl,
        }
    }

    /// Lifetime of issued refresh tokens.
    pub fn refresh_ttl(&self) -> Duration {
        self.refresh_ttl
    }

    /// Mint a new token pair bound to a subject and role.
    ///
    /// # Errors
    /// * `JwtError` - Token encoding failed
    pub fn issue(&self, subject: &str, role: &str) -> Result<TokenPair, JwtError> {
        let access_claims = SessionClaims::new(subject, role, self.access_ttl);
        let refresh_claims = SessionClaims::new(subject, role, self.refresh_ttl);

        Ok(TokenPair {
            access_token: self.jwt_handler.encode(&access_claims)?,
            refresh_token: self.jwt_handler.encode(&refresh_claims)?,
        })
    }

    /// Verify signature and expiry of a token and return its claims.
    ///
    /// # Errors
    /// * `TokenExpired` - Token `exp` is in the past
    /// * `DecodingFailed` - Bad signature or malformed token
    pub fn verify(&self, token: &str) -> Result<SessionClaims, JwtError> {
        self.jwt_handler.decode(token)
    }
}
