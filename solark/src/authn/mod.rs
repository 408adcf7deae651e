//! Credential state for the password grant

pub mod credentials;

pub use credentials::{AuthState, Credentials};
