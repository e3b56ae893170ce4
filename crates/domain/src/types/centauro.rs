//! Shipment shapes of the second backend (`/api/v2/shipments`)

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none, DefaultOnNull};

use super::status::StatusCode;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CentauroStateInfo {
    pub cod: Option<String>,
    pub uf: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CentauroCityInfo {
    pub cod: Option<String>,
    pub municipio: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CentauroShipmentStatus {
    pub code: StatusCode,
    pub message: Option<String>,
    #[serde(rename = "type")]
    pub status_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CentauroInvoice {
    pub key: String,
    pub status: CentauroShipmentStatus,
}

#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CentauroTrackingEvent {
    pub id: String,
    pub code: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub message: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub created_at: String,
    pub invoice_key: Option<String>,
}

/// CT-e issued for the client, with the invoices it covers.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CentauroClientCte {
    pub id: String,
    pub access_key: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub invoices: Vec<CentauroInvoice>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub tracking_events: Vec<CentauroTrackingEvent>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CentauroSubcontractedCte {
    pub id: String,
    pub access_key: String,
    pub carrier_name: Option<String>,
    pub carrier_cnpj: Option<String>,
}

/// Shipment of the second backend; `null` CT-e lists read as empty.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CentauroShipment {
    pub id: String,
    pub external_id: Option<String>,
    pub client_id: Option<String>,
    pub origin_state: Option<CentauroStateInfo>,
    pub origin_city: Option<CentauroCityInfo>,
    pub destination_state: Option<CentauroStateInfo>,
    pub destination_city: Option<CentauroCityInfo>,
    pub status: Option<CentauroShipmentStatus>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub client_ctes: Vec<CentauroClientCte>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub subcontracted_ctes: Vec<CentauroSubcontractedCte>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl CentauroShipment {
    /// Every invoice key across the shipment's client CT-es.
    pub fn invoice_keys(&self) -> Vec<&str> {
        self.client_ctes
            .iter()
            .flat_map(|cte| cte.invoices.iter().map(|invoice| invoice.key.as_str()))
            .collect()
    }
}

/// Structured status fields sent to `POST /shipments/{id}/status`.
///
/// Without `invoice_keys` the backend applies the status to every invoice of
/// the shipment.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CentauroStatusUpdate {
    pub code: String,
    pub invoice_keys: Option<Vec<String>>,
}

impl CentauroStatusUpdate {
    pub fn new(code: &StatusCode) -> Self {
        Self { code: code.as_key().into_owned(), invoice_keys: None }
    }

    #[must_use]
    pub fn with_invoice_keys(mut self, keys: Vec<String>) -> Self {
        let keys: Vec<String> =
            keys.into_iter().filter(|key| !key.trim().is_empty()).collect();
        self.invoice_keys = if keys.is_empty() { None } else { Some(keys) };
        self
    }
}

/// Fields accepted by `POST /shipments/`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CentauroShipmentDraft {
    pub external_id: Option<String>,
    pub client_id: Option<String>,
    pub origin_state: Option<CentauroStateInfo>,
    pub origin_city: Option<CentauroCityInfo>,
    pub destination_state: Option<CentauroStateInfo>,
    pub destination_city: Option<CentauroCityInfo>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decodes_nested_ctes() {
        let shipment: CentauroShipment = serde_json::from_value(json!({
            "id": "a1",
            "status": { "code": "25", "message": "EM ROTA DE ENTREGA", "type": "Transito" },
            "client_ctes": [{
                "id": "c1",
                "access_key": "3524",
                "invoices": [
                    { "key": "NF1", "status": { "code": "25" } },
                    { "key": "NF2", "status": { "code": 1 } }
                ]
            }]
        }))
        .unwrap();

        assert_eq!(shipment.invoice_keys(), vec!["NF1", "NF2"]);
        assert_eq!(shipment.status.unwrap().status_type.as_deref(), Some("Transito"));
    }

    #[test]
    fn null_collections_read_as_empty() {
        let shipment: CentauroShipment = serde_json::from_value(json!({
            "id": "a2",
            "client_ctes": [{
                "id": "c1",
                "access_key": "3524",
                "invoices": null,
                "tracking_events": [{ "id": "e1", "code": "1", "message": null }]
            }],
            "subcontracted_ctes": null
        }))
        .unwrap();

        assert!(shipment.invoice_keys().is_empty());
        assert!(shipment.subcontracted_ctes.is_empty());
        assert_eq!(shipment.client_ctes[0].tracking_events[0].message, "");
    }

    #[test]
    fn blank_invoice_keys_are_dropped() {
        let update = CentauroStatusUpdate::new(&StatusCode::from("1"))
            .with_invoice_keys(vec![" ".into(), String::new()]);

        assert_eq!(serde_json::to_value(&update).unwrap(), json!({ "code": "1" }));
    }
}
