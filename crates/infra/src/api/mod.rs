//! Backend API access
//!
//! One [`ApiClient`] per integration, handed out by [`ApiClientFactory`].

pub mod client;
pub mod factory;

pub use client::{error_message, map_status_error, ApiClient};
pub use factory::ApiClientFactory;
