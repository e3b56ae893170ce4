//! # Cargas Infrastructure
//!
//! Infrastructure implementations of core ports plus everything that talks
//! to the network or the filesystem.
//!
//! This crate contains:
//! - The hook-based HTTP client and per-integration API clients
//! - The login/logout service of the auth-provider integration
//! - Shipment services for each backend integration
//! - File-backed session storage and the configuration loader
//!
//! ## Architecture
//! - Implements traits defined in `cargas-core`
//! - Depends on `cargas-domain` and `cargas-core`
//! - Contains all "impure" code (HTTP, disk)

pub mod api;
pub mod auth;
pub mod config;
pub mod documents;
pub mod errors;
pub mod http;
pub mod shipments;
pub mod storage;

// Re-export commonly used items
pub use api::{ApiClient, ApiClientFactory};
pub use auth::AuthService;
pub use documents::read_document;
pub use errors::InfraError;
pub use http::{HttpClient, RecordingRedirect};
pub use shipments::{CentauroShipmentService, NikeShipmentService, UploadOutcome};
pub use storage::FileSessionStorage;
