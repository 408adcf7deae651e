//! Sol-Ark Cloud client library
//!
//! Logs in with a password grant and reads plant listings and real-time
//! power flow from the Sol-Ark Cloud API.

pub mod authn;
pub mod cloud;
pub mod errors;
pub mod http;
pub mod logs;
pub mod options;
pub mod utils;

pub use authn::{AuthState, Credentials};
pub use cloud::SolArkCloud;
pub use errors::SolArkError;
pub use options::ClientOptions;
pub use solark_schemas as schemas;
