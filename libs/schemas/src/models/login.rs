use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::SchemaError;
use crate::models::envelope::Envelope;
use crate::schema::{check_length, check_non_empty, Schema};

pub const DEFAULT_GRANT_TYPE: &str = "password";
pub const DEFAULT_CLIENT_ID: &str = "csp-web";

fn default_grant_type() -> String {
    DEFAULT_GRANT_TYPE.to_string()
}

fn default_client_id() -> String {
    DEFAULT_CLIENT_ID.to_string()
}

/// Password grant sent to the token endpoint
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default = "default_grant_type")]
    pub grant_type: String,

    #[serde(default = "default_client_id")]
    pub client_id: String,

    pub username: String,

    pub password: String,
}

impl LoginRequest {
    /// Build a validated request with the default grant type and client id
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self, SchemaError> {
        Self {
            grant_type: default_grant_type(),
            client_id: default_client_id(),
            username: username.into(),
            password: password.into(),
        }
        .finalize()
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("grant_type", &self.grant_type)
            .field("client_id", &self.client_id)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Schema for LoginRequest {
    const NAME: &'static str = "LoginRequest";

    fn finalize(self) -> Result<Self, SchemaError> {
        check_length(Self::NAME, "grant_type", &self.grant_type, 1, Some(20))?;
        check_length(Self::NAME, "client_id", &self.client_id, 1, Some(20))?;
        check_length(Self::NAME, "username", &self.username, 1, Some(100))?;
        check_length(Self::NAME, "password", &self.password, 1, Some(100))?;
        Ok(self)
    }
}

/// Token grant returned by the token endpoint
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginData {
    pub access_token: String,

    /// Token validity in seconds
    pub expires_in: i64,

    pub token_type: String,

    pub refresh_token: String,

    pub scope: String,
}

impl fmt::Debug for LoginData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginData")
            .field("access_token", &"[REDACTED]")
            .field("expires_in", &self.expires_in)
            .field("token_type", &self.token_type)
            .field("refresh_token", &"[REDACTED]")
            .field("scope", &self.scope)
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(flatten)]
    pub envelope: Envelope,

    pub data: LoginData,
}

impl Schema for LoginResponse {
    const NAME: &'static str = "LoginResponse";

    fn finalize(self) -> Result<Self, SchemaError> {
        check_non_empty(Self::NAME, "access_token", &self.data.access_token)?;
        check_non_empty(Self::NAME, "token_type", &self.data.token_type)?;
        check_non_empty(Self::NAME, "refresh_token", &self.data.refresh_token)?;
        check_non_empty(Self::NAME, "scope", &self.data.scope)?;
        Ok(self)
    }
}
