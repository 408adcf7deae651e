//! Plant listing endpoint

use solark_schemas::models::{PlantsQuery, PlantsResponse};

use crate::errors::SolArkError;
use crate::http::client::HttpClient;

pub const PLANTS_PATH: &str = "/api/v1/plants";

impl HttpClient {
    /// List the plants visible to the token holder
    pub async fn list_plants(
        &self,
        token: &str,
        query: &PlantsQuery,
    ) -> Result<PlantsResponse, SolArkError> {
        self.get_with_query(PLANTS_PATH, token, query).await
    }
}
