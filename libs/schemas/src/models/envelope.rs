use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::schema::Schema;

/// Fields shared by every response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope {
    /// Application status code
    pub code: i64,

    /// Server message
    pub msg: String,

    /// Whether the call succeeded
    pub success: bool,
}

/// Base response shape, valid for success and error bodies alike
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenericResponse {
    #[serde(flatten)]
    pub envelope: Envelope,

    #[serde(default)]
    pub data: Option<Map<String, Value>>,
}

impl Schema for GenericResponse {
    const NAME: &'static str = "GenericResponse";
}
