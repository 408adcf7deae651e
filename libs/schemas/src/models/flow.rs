use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::SchemaError;
use crate::models::envelope::Envelope;
use crate::schema::Schema;

/// The flow endpoint takes no body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowRequest {}

impl Schema for FlowRequest {
    const NAME: &'static str = "FlowRequest";
}

/// Instantaneous power flow for one plant.
///
/// Powers are in watts, `soc` is the battery state of charge in percent.
/// The boolean `*_to` / `to_*` flags describe the direction of each flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowSnapshot {
    #[serde(rename = "custCode")]
    pub cust_code: i64,
    #[serde(rename = "meterCode")]
    pub meter_code: i64,
    #[serde(rename = "battPower")]
    pub battery_power: i64,
    #[serde(rename = "gridOrMeterPower")]
    pub grid_or_meter_power: i64,
    #[serde(rename = "loadOrEpsPower")]
    pub load_or_eps_power: i64,
    #[serde(rename = "pvPower")]
    pub pv_power: i64,
    #[serde(rename = "genPower")]
    pub generator_power: i64,
    #[serde(rename = "minPower")]
    pub min_power: i64,
    pub soc: i64,

    #[serde(rename = "pvTo")]
    pub pv_to: bool,
    #[serde(rename = "toLoad")]
    pub to_load: bool,
    #[serde(rename = "toGrid")]
    pub to_grid: bool,
    #[serde(rename = "toBat")]
    pub to_battery: bool,
    #[serde(rename = "batTo")]
    pub battery_to: bool,
    #[serde(rename = "gridTo")]
    pub grid_to: bool,
    #[serde(rename = "genTo")]
    pub generator_to: bool,
    #[serde(rename = "minTo")]
    pub min_to: bool,
    #[serde(rename = "existsGen")]
    pub exists_generator: bool,
    #[serde(rename = "existsMin")]
    pub exists_min: bool,
    #[serde(rename = "genOn")]
    pub generator_on: bool,
    #[serde(rename = "microOn")]
    pub micro_on: bool,
    #[serde(rename = "existsMeter")]
    pub exists_meter: bool,
    #[serde(rename = "bmsCommFaultFlag")]
    pub bms_comm_fault_flag: bool,
    #[serde(rename = "existThinkPower")]
    pub exist_think_power: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowResponse {
    #[serde(flatten)]
    pub envelope: Envelope,

    /// Validated data as sent by the server
    pub data: Map<String, Value>,

    #[serde(skip)]
    pub snapshot: FlowSnapshot,
}

impl FlowResponse {
    pub fn snapshot(&self) -> &FlowSnapshot {
        &self.snapshot
    }
}

impl Schema for FlowResponse {
    const NAME: &'static str = "FlowResponse";

    fn finalize(mut self) -> Result<Self, SchemaError> {
        self.snapshot = serde_json::from_value(Value::Object(self.data.clone())).map_err(|source| {
            SchemaError::Malformed {
                schema: Self::NAME,
                source,
            }
        })?;
        Ok(self)
    }
}
