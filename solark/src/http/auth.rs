//! Token endpoint

use solark_schemas::models::{LoginRequest, LoginResponse};

use crate::errors::SolArkError;
use crate::http::client::HttpClient;

pub const TOKEN_PATH: &str = "/oauth/token";

impl HttpClient {
    /// Exchange a password grant for tokens
    pub async fn request_token(&self, request: &LoginRequest) -> Result<LoginResponse, SolArkError> {
        self.post_unauthenticated(TOKEN_PATH, request).await
    }
}
