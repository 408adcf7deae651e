//! Error types for the Sol-Ark Cloud client

use solark_schemas::SchemaError;
use thiserror::Error;

/// Application code the service returns when it rejects credentials
pub const AUTHENTICATION_FAILED_CODE: i64 = 102;

/// Client-side code for calls made before `login`
pub const NOT_LOGGED_IN_CODE: i64 = 1001;

/// Client-side code for calls made with an expired token
pub const TOKEN_EXPIRED_CODE: i64 = 1002;

/// Main error type for the Sol-Ark Cloud client
#[derive(Error, Debug)]
pub enum SolArkError {
    #[error("Must call login() first to get credentials")]
    NotLoggedIn,

    #[error("Access token has expired")]
    TokenExpired,

    #[error("Authentication error {code}: {msg}")]
    Authentication { code: i64, msg: String },

    #[error("Unknown error {code}: {msg}")]
    Unknown { code: i64, msg: String },

    #[error("Schema validation error: {0}")]
    Schema(#[from] SchemaError),

    #[error("HTTP error {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

impl SolArkError {
    /// Numeric code attached to this error, if any
    pub fn code(&self) -> Option<i64> {
        match self {
            SolArkError::NotLoggedIn => Some(NOT_LOGGED_IN_CODE),
            SolArkError::TokenExpired => Some(TOKEN_EXPIRED_CODE),
            SolArkError::Authentication { code, .. } | SolArkError::Unknown { code, .. } => Some(*code),
            SolArkError::Schema(_)
            | SolArkError::HttpStatus { .. }
            | SolArkError::Transport(_)
            | SolArkError::Json(_)
            | SolArkError::InvalidBaseUrl(_) => None,
        }
    }

    /// Server or client message for coded errors
    pub fn message(&self) -> Option<&str> {
        match self {
            SolArkError::Authentication { msg, .. } | SolArkError::Unknown { msg, .. } => Some(msg),
            _ => None,
        }
    }

    /// Map an unsuccessful application response to its error kind
    pub fn from_application(code: i64, msg: String) -> Self {
        if code == AUTHENTICATION_FAILED_CODE {
            SolArkError::Authentication { code, msg }
        } else {
            SolArkError::Unknown { code, msg }
        }
    }
}
