//! Domain types and models
//!
//! Shipment shapes are owned by the backends; each integration keeps its own
//! module and the two are never converted into one another.

pub mod auth;
pub mod centauro;
pub mod credential;
pub mod document;
pub mod integration;
pub mod nike;
pub mod status;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use auth::{LoginData, LoginRequest, LoginResponse};
pub use centauro::{
    CentauroClientCte, CentauroCityInfo, CentauroInvoice, CentauroShipment,
    CentauroShipmentDraft, CentauroShipmentStatus, CentauroStateInfo, CentauroStatusUpdate,
    CentauroSubcontractedCte, CentauroTrackingEvent,
};
pub use credential::Credential;
pub use document::DocumentFile;
pub use integration::{IntegrationConfig, IntegrationFeatures};
pub use nike::{
    Actor, Location, NikeShipment, NikeShipmentStatus, NikeStatusUpdate, Receiver, Schedule,
    ShipmentInvoice, XmlUploadResponse,
};
pub use status::{StatusCategory, StatusCode, StatusDescriptor};

/// Identifier of a backend record, sent as a number or a string depending on
/// the backend revision.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Numeric(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(value) => write!(f, "{value}"),
            Self::Text(value) => f.write_str(value),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self::Numeric(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_accepts_both_shapes() {
        let numeric: RecordId = serde_json::from_str("42").unwrap();
        let text: RecordId = serde_json::from_str(r#""5f0c-uuid""#).unwrap();

        assert_eq!(numeric, RecordId::Numeric(42));
        assert_eq!(numeric.to_string(), "42");
        assert_eq!(text.to_string(), "5f0c-uuid");
    }
}
