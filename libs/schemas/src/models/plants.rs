use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::SchemaError;
use crate::models::envelope::Envelope;
use crate::schema::Schema;

/// The plant listing takes no body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantsRequest {}

impl Schema for PlantsRequest {
    const NAME: &'static str = "PlantsRequest";
}

/// Query string sent with the plant listing.
///
/// Only the first page is ever requested; accounts with more than
/// `limit` plants see a truncated listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlantsQuery {
    pub page: u32,
    pub limit: u32,
    pub name: String,
    pub status: String,
    #[serde(rename = "type")]
    pub plant_type: i32,
    #[serde(rename = "sortCol")]
    pub sort_col: String,
    pub order: u8,
}

impl Default for PlantsQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: 100,
            name: String::new(),
            status: String::new(),
            plant_type: -1,
            sort_col: "createAt".to_string(),
            order: 2,
        }
    }
}

/// A plant record: the validated `id` plus everything the server sent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct PlantInfo {
    pub id: i64,
    pub record: Map<String, Value>,
}

impl PlantInfo {
    pub fn name(&self) -> Option<&str> {
        self.record.get("name").and_then(Value::as_str)
    }

    pub fn status(&self) -> Option<i64> {
        self.record.get("status").and_then(Value::as_i64)
    }

    pub fn address(&self) -> Option<&str> {
        self.record.get("address").and_then(Value::as_str)
    }
}

impl TryFrom<Map<String, Value>> for PlantInfo {
    type Error = String;

    fn try_from(record: Map<String, Value>) -> Result<Self, Self::Error> {
        let id = match record.get("id") {
            Some(value) => value
                .as_i64()
                .ok_or_else(|| format!("plant `id` must be an integer, got {}", value))?,
            None => return Err("missing field `id`".to_string()),
        };

        Ok(Self { id, record })
    }
}

impl From<PlantInfo> for Map<String, Value> {
    fn from(info: PlantInfo) -> Self {
        info.record
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantsData {
    pub infos: Vec<PlantInfo>,

    /// Paging metadata and any other fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantsResponse {
    #[serde(flatten)]
    pub envelope: Envelope,

    pub data: PlantsData,

    /// Plant records keyed by id
    #[serde(skip)]
    pub plants: HashMap<i64, Map<String, Value>>,
}

impl Schema for PlantsResponse {
    const NAME: &'static str = "PlantsResponse";

    fn finalize(mut self) -> Result<Self, SchemaError> {
        self.plants = self
            .data
            .infos
            .iter()
            .map(|info| (info.id, info.record.clone()))
            .collect();
        Ok(self)
    }
}
