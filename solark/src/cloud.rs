//! Sol-Ark Cloud API client

use chrono::Utc;
use solark_schemas::models::{FlowResponse, LoginRequest, LoginResponse, PlantsQuery, PlantsResponse};
use tracing::{debug, info};

use crate::authn::credentials::{auth_state, AuthState, Credentials};
use crate::errors::SolArkError;
use crate::http::HttpClient;
use crate::options::ClientOptions;

/// Sol-Ark Cloud API client.
///
/// Holds the credentials of one login. Each operation issues a single
/// request and returns once it completes; nothing is retried or refreshed.
#[derive(Debug)]
pub struct SolArkCloud {
    http: HttpClient,
    credentials: Option<Credentials>,
}

impl SolArkCloud {
    /// Create a client with the given options
    pub fn new(options: &ClientOptions) -> Result<Self, SolArkError> {
        Ok(Self {
            http: HttpClient::new(options)?,
            credentials: None,
        })
    }

    /// Create a client against the public API
    pub fn default_client() -> Result<Self, SolArkError> {
        Self::new(&ClientOptions::default())
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Credentials from the last successful login
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    pub fn auth_state(&self) -> AuthState {
        auth_state(self.credentials.as_ref(), Utc::now())
    }

    /// Login to Sol-Ark Cloud API
    pub async fn login(&mut self, username: &str, password: &str) -> Result<LoginResponse, SolArkError> {
        let request = LoginRequest::new(username, password)?;

        info!("Logging in to {} as {}", self.http.base_url(), request.username);
        let response = self.http.request_token(&request).await?;

        let credentials = Credentials::from_grant(&response.data, Utc::now())?;
        info!("Logged in, token expires at {}", credentials.expires_at());
        self.credentials = Some(credentials);

        Ok(response)
    }

    /// Get list of all available plants
    pub async fn plants(&self) -> Result<PlantsResponse, SolArkError> {
        let token = self.bearer_token()?;
        let response = self.http.list_plants(token, &PlantsQuery::default()).await?;
        debug!("Listed {} plants", response.plants.len());
        Ok(response)
    }

    /// Get flow data for a plant
    pub async fn flow(&self, plant_id: i64) -> Result<FlowResponse, SolArkError> {
        let token = self.bearer_token()?;
        self.http.plant_flow(token, plant_id).await
    }

    fn bearer_token(&self) -> Result<&str, SolArkError> {
        let credentials = self.credentials.as_ref().ok_or(SolArkError::NotLoggedIn)?;

        if credentials.is_expired_at(Utc::now()) {
            return Err(SolArkError::TokenExpired);
        }

        Ok(credentials.access_token())
    }
}
