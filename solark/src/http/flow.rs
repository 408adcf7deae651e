//! Power flow endpoint

use solark_schemas::models::FlowResponse;

use crate::errors::SolArkError;
use crate::http::client::HttpClient;

/// Path of the flow snapshot for a plant
pub fn flow_path(plant_id: i64) -> String {
    format!("/api/v1/plant/energy/{}/flow", plant_id)
}

impl HttpClient {
    /// Fetch the current power flow of a plant
    pub async fn plant_flow(&self, token: &str, plant_id: i64) -> Result<FlowResponse, SolArkError> {
        self.get(&flow_path(plant_id), token).await
    }
}
