//! HTTP client implementation

use reqwest::{header, Client, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use solark_schemas::models::GenericResponse;
use solark_schemas::Schema;
use tracing::{debug, error, warn};
use url::Url;

use crate::errors::SolArkError;
use crate::options::ClientOptions;

/// HTTP client for the Sol-Ark Cloud API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client
    pub fn new(options: &ClientOptions) -> Result<Self, SolArkError> {
        let base_url = Url::parse(options.base_url.trim())?;

        let client = Client::builder()
            .timeout(options.timeout)
            .user_agent(options.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Make a GET request with a bearer token
    pub async fn get<T: Schema>(&self, path: &str, token: &str) -> Result<T, SolArkError> {
        let url = self.url(path);
        debug!("GET {}", url);

        let request = self
            .client
            .get(&url)
            .header(header::AUTHORIZATION, format!("Bearer {}", token));

        self.send(request).await
    }

    /// Make a GET request with a bearer token and query string
    pub async fn get_with_query<T: Schema, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        token: &str,
        query: &Q,
    ) -> Result<T, SolArkError> {
        let url = self.url(path);
        debug!("GET {}", url);

        let request = self
            .client
            .get(&url)
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .query(query);

        self.send(request).await
    }

    /// Make a POST request without credentials
    pub async fn post_unauthenticated<T: Schema, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, SolArkError> {
        let url = self.url(path);
        debug!("POST {}", url);

        let request = self.client.post(&url).json(body);

        self.send(request).await
    }

    async fn send<T: Schema>(&self, request: RequestBuilder) -> Result<T, SolArkError> {
        let response = request.send().await?;

        let status = response.status();
        if status.is_client_error() || status.is_server_error() {
            let body = response.text().await.unwrap_or_default();
            error!("HTTP request failed: {} - {}", status, body);
            return Err(SolArkError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        let body: Value = serde_json::from_str(&text)?;
        interpret::<T>(&body)
    }
}

/// Turn a decoded body into the expected schema or the matching error
pub fn interpret<T: Schema>(body: &Value) -> Result<T, SolArkError> {
    let generic = GenericResponse::parse(body)?;

    if generic.envelope.success {
        return Ok(T::parse(body)?);
    }

    let envelope = generic.envelope;
    warn!(
        "{} rejected by server: code={} msg={}",
        T::NAME,
        envelope.code,
        envelope.msg
    );
    Err(SolArkError::from_application(envelope.code, envelope.msg))
}
