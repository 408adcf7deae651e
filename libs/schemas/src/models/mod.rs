//! API models

mod envelope;
mod flow;
mod login;
mod plants;

pub use envelope::{Envelope, GenericResponse};
pub use flow::{FlowRequest, FlowResponse, FlowSnapshot};
pub use login::{LoginData, LoginRequest, LoginResponse, DEFAULT_CLIENT_ID, DEFAULT_GRANT_TYPE};
pub use plants::{PlantInfo, PlantsData, PlantsQuery, PlantsRequest, PlantsResponse};
