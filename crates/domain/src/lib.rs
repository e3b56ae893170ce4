//! # Cargas Domain
//!
//! Business domain types and models for the Cargas operations client.
//!
//! This crate contains:
//! - Integration configuration and the shared session credential
//! - Status codes, categories and descriptors
//! - Shipment shapes for each backend integration
//! - Domain error types and Result definitions
//! - Configuration structures
//!
//! ## Architecture
//! - No dependencies on other Cargas crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
