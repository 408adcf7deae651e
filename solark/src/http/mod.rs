//! HTTP transport and endpoint bindings

pub mod auth;
pub mod client;
pub mod flow;
pub mod plants;

pub use client::HttpClient;
