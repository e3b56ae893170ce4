//! # Cargas Core
//!
//! Pure business logic layer - no HTTP dependencies.
//!
//! This crate contains:
//! - The integration registry and per-integration status vocabularies
//! - Port interfaces (session storage, login redirect, clock)
//! - The shared credential store and the integration selection context
//! - Shipment filtering and document staging rules
//!
//! ## Architecture Principles
//! - Only depends on `cargas-domain`
//! - No network code; storage and navigation are reached through traits
//! - Every piece of shared state is an explicit object, never a global

pub mod documents;
pub mod filter;
pub mod ports;
pub mod registry;
pub mod selection;
pub mod session;
pub mod storage;
pub mod time;
pub mod vocabulary;

// Re-export specific items to avoid ambiguity
pub use documents::{partition_documents, StagedDocuments};
pub use filter::{Searchable, ShipmentFilter};
pub use ports::{LoginRedirect, SessionStorage};
pub use registry::IntegrationRegistry;
pub use selection::IntegrationSelection;
pub use session::{decode_token_payload, CredentialStore};
pub use storage::MemorySessionStorage;
pub use time::{Clock, MockClock, SystemClock};
pub use vocabulary::StatusVocabulary;
