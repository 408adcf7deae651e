//! Access token management

use chrono::{DateTime, TimeDelta, Utc};
use secrecy::{ExposeSecret, SecretString};
use solark_schemas::models::{LoginData, LoginResponse};
use solark_schemas::{Schema, SchemaError};

/// Where a client stands in the login lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    Authenticated,
    Expired,
}

/// Tokens granted by a successful login
#[derive(Debug)]
pub struct Credentials {
    access_token: SecretString,

    /// Kept for completeness; the client never renews with it
    refresh_token: SecretString,

    expires_at: DateTime<Utc>,
}

impl Credentials {
    /// Build credentials from a token grant received at `issued_at`
    pub fn from_grant(data: &LoginData, issued_at: DateTime<Utc>) -> Result<Self, SchemaError> {
        let expires_at = TimeDelta::try_seconds(data.expires_in)
            .and_then(|validity| issued_at.checked_add_signed(validity))
            .ok_or_else(|| SchemaError::OutOfRange {
                schema: LoginResponse::NAME,
                field: "expires_in",
                reason: format!("{} seconds overflows the expiry timestamp", data.expires_in),
            })?;

        Ok(Self {
            access_token: SecretString::from(data.access_token.clone()),
            refresh_token: SecretString::from(data.refresh_token.clone()),
            expires_at,
        })
    }

    pub fn access_token(&self) -> &str {
        self.access_token.expose_secret()
    }

    pub fn refresh_token(&self) -> &str {
        self.refresh_token.expose_secret()
    }

    /// Get expiration time
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Check if the token is expired at `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Check if the token is expired
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Get time until expiration, negative once expired
    pub fn time_until_expiry(&self) -> TimeDelta {
        self.expires_at - Utc::now()
    }
}

/// State of an optional set of credentials at `now`
pub fn auth_state(credentials: Option<&Credentials>, now: DateTime<Utc>) -> AuthState {
    match credentials {
        None => AuthState::Unauthenticated,
        Some(credentials) if credentials.is_expired_at(now) => AuthState::Expired,
        Some(_) => AuthState::Authenticated,
    }
}
