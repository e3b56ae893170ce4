//! Shipment shapes of the auth-provider backend (`/cargas`)
//!
//! Field names follow the backend's Brazilian fiscal vocabulary (CT-e/NF-e
//! actor tags such as `xNome`, `nDoc`); Rust names are descriptive and the
//! wire names are kept through `serde(rename)`.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none, DefaultOnNull, DisplayFromStr, PickFirst};

use super::status::{StatusCategory, StatusCode};
use super::RecordId;

/// Party of a shipment (sender, recipient, receiver, payer).
///
/// Numeric codes are also accepted as strings.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    #[serde(rename = "nDoc")]
    pub document: Option<String>,
    #[serde(rename = "IE")]
    pub state_registration: Option<String>,
    #[serde(rename = "cFiscal")]
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub fiscal_code: Option<i64>,
    #[serde(rename = "xNome")]
    pub name: Option<String>,
    #[serde(rename = "xFant")]
    pub trade_name: Option<String>,
    #[serde(rename = "xLgr")]
    pub street: Option<String>,
    #[serde(rename = "nro")]
    pub number: Option<String>,
    #[serde(rename = "xCpl")]
    pub complement: Option<String>,
    #[serde(rename = "xBairro")]
    pub district: Option<String>,
    #[serde(rename = "cMun")]
    pub city_code: Option<String>,
    #[serde(rename = "CEP")]
    pub postal_code: Option<String>,
    #[serde(rename = "cPais")]
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub country_code: Option<i64>,
    #[serde(rename = "nFone")]
    pub phone: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "UF")]
    pub state: Option<String>,
    #[serde(rename = "municipioCodigoIbge")]
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub ibge_city_code: Option<i64>,
    #[serde(rename = "municipioNome")]
    pub city_name: Option<String>,
}

/// Invoice attached to a shipment.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentInvoice {
    pub id: RecordId,
    pub access_key: Option<String>,
    pub cte_chave: Option<String>,
    pub remetente_ndoc: Option<String>,
}

/// Milestone timestamps as reported by the backend.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub et_origem: Option<String>,
    pub chegada_coleta: Option<String>,
    pub saida_coleta: Option<String>,
    pub eta_destino: Option<String>,
    pub chegada_destino: Option<String>,
    pub finalizacao: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub uf: Option<String>,
    pub municipio: Option<String>,
}

/// Status embedded in a shipment payload.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NikeShipmentStatus {
    pub codigo: StatusCode,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub descricao: String,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub categoria: String,
}

impl NikeShipmentStatus {
    /// Category parsed from the backend label, if it is a known one.
    pub fn category(&self) -> Option<StatusCategory> {
        self.categoria.parse().ok()
    }
}

/// Shipment as listed and detailed by the auth-provider backend.
///
/// Decoding is lenient: amounts may arrive as decimal strings and a `null`
/// invoice list reads as empty.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NikeShipment {
    pub id: RecordId,
    pub external_ref: Option<String>,
    pub service_code: Option<String>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub total_weight: Option<f64>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub total_value: Option<f64>,
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    pub volumes_qty: Option<f64>,
    pub rem: Option<Actor>,
    pub dest: Option<Actor>,
    pub recebedor: Option<Actor>,
    pub toma: Option<Actor>,
    pub horarios: Option<Schedule>,
    pub origem: Option<Location>,
    pub destino: Option<Location>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub invoices: Vec<ShipmentInvoice>,
    pub status: Option<NikeShipmentStatus>,
}

/// Person who received the goods, reported with a delivery status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receiver {
    pub nome: String,
    pub cnpj_cpf: String,
    pub data_recebimento: String,
}

/// Structured status fields sent to `POST /cargas/{id}/status`.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NikeStatusUpdate {
    pub code: String,
    pub observacao: Option<String>,
    pub recebedor: Option<Receiver>,
}

impl NikeStatusUpdate {
    pub fn new(code: &StatusCode) -> Self {
        Self { code: code.as_key().into_owned(), observacao: None, recebedor: None }
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let note = note.into();
        if !note.trim().is_empty() {
            self.observacao = Some(note);
        }
        self
    }

    /// Attach receiver data; ignored unless both name and document are set.
    #[must_use]
    pub fn with_receiver(mut self, receiver: Receiver) -> Self {
        if !receiver.nome.trim().is_empty() && !receiver.cnpj_cpf.trim().is_empty() {
            self.recebedor = Some(receiver);
        }
        self
    }
}

/// Response of `POST /cargas/{invoiceId}/upload-xml`.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct XmlUploadResponse {
    #[serde(default)]
    pub sucesso: bool,
    pub chave: Option<String>,
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub xmls_b64: Vec<String>,
    pub resposta_upload: Option<serde_json::Value>,
    pub mensagem: Option<String>,
}
