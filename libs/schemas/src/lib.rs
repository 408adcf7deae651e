//! Sol-Ark Cloud API schemas
//!
//! Typed request and response shapes for the Sol-Ark Cloud API, validated
//! through an explicit parse step.

pub mod errors;
pub mod models;
pub mod schema;

pub use errors::SchemaError;
pub use schema::Schema;
