//! Marketplace API Bindings
//!
//! Frontend bindings to the remote HTTP API, organized by resource.

mod categories;
mod client;
mod credentials;
mod farms;
mod orders;
mod products;
mod seasons;

pub use client::ApiClient;
pub use credentials::SessionCredentials;
