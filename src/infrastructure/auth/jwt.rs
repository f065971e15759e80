//! JWT token generation and validation

use std::collections::HashSet;
use std::fmt::Debug;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{DomainError, Identity, Role, UserId};

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    /// User ID
    pub id: i64,
    /// Username
    pub username: String,
    /// Role, empty for regular users
    pub role: String,
    /// Expiration timestamp (Unix epoch), only present when expiry is configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl JwtClaims {
    /// Create new claims for an identity.
    ///
    /// Fails when the lifetime pushes `exp` outside the representable range.
    pub fn new(identity: &Identity, expiration_hours: Option<u64>) -> Result<Self, DomainError> {
        let exp = expiration_hours.map(expires_at).transpose()?;

        Ok(Self {
            id: identity.id.value(),
            username: identity.username.clone(),
            role: identity.role.as_str().to_string(),
            exp,
        })
    }

    pub fn into_identity(self) -> Identity {
        Identity::new(UserId::new(self.id), self.username, Role::new(self.role))
    }
}

fn expires_at(hours: u64) -> Result<i64, DomainError> {
    i64::try_from(hours)
        .ok()
        .and_then(Duration::try_hours)
        .and_then(|lifetime| Utc::now().checked_add_signed(lifetime))
        .map(|at| at.timestamp())
        .ok_or_else(|| {
            DomainError::internal(format!("token lifetime of {} hours is out of range", hours))
        })
}

/// Configuration for JWT service
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Shared secret for signing tokens
    pub secret: String,
    /// Token lifetime in hours; `None` issues tokens without an `exp` claim
    pub expiration_hours: Option<u64>,
}

impl JwtConfig {
    /// Create new JWT configuration
    pub fn new(secret: impl Into<String>, expiration_hours: Option<u64>) -> Self {
        Self {
            secret: secret.into(),
            expiration_hours,
        }
    }
}

/// Trait for JWT operations
pub trait JwtGenerator: Send + Sync + Debug {
    /// Issue a signed token for an identity
    fn generate(&self, identity: &Identity) -> Result<String, DomainError>;

    /// Verify a token and decode the identity it carries
    fn validate(&self, token: &str) -> Result<Identity, DomainError>;

    /// Token lifetime in hours, if tokens expire at all
    fn expiration_hours(&self) -> Option<u64>;
}

/// HS256 JWT service backed by a single shared secret
#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("expiration_hours", &self.config.expiration_hours)
            .field("encoding_key", &"[hidden]")
            .field("decoding_key", &"[hidden]")
            .finish()
    }
}

impl JwtService {
    /// Create a new JWT service with the given configuration
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        // `exp` is mandatory only when tokens expire, but a past `exp` is
        // always rejected.
        let mut validation = Validation::new(Algorithm::HS256);
        if config.expiration_hours.is_none() {
            validation.required_spec_claims = HashSet::new();
        }

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }
}

impl JwtGenerator for JwtService {
    fn generate(&self, identity: &Identity) -> Result<String, DomainError> {
        let claims = JwtClaims::new(identity, self.config.expiration_hours)?;

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| DomainError::internal(format!("Failed to generate JWT: {}", e)))
    }

    fn validate(&self, token: &str) -> Result<Identity, DomainError> {
        let token_data = decode::<JwtClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                debug!(error = %e, "JWT rejected");
                DomainError::credential("invalid token")
            })?;

        Ok(token_data.claims.into_identity())
    }

    fn expiration_hours(&self) -> Option<u64> {
        self.config.expiration_hours
    }
}
