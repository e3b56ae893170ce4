//! Status codes, categories and descriptors
//!
//! Both backends send a status code, but the code spaces are unrelated: the
//! same value can mean different things per integration. Nothing in this
//! module maps codes across integrations.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::impl_wire_label_conversions;

/// Status code as sent by a backend: a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatusCode {
    Numeric(i64),
    Text(String),
}

impl StatusCode {
    /// String form used for comparisons and lookups.
    pub fn as_key(&self) -> Cow<'_, str> {
        match self {
            Self::Numeric(value) => Cow::Owned(value.to_string()),
            Self::Text(value) => Cow::Borrowed(value.trim()),
        }
    }

    /// Numeric value, parsing textual codes such as `"10"`.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Numeric(value) => Some(*value),
            Self::Text(value) => value.trim().parse().ok(),
        }
    }

    /// Compare two codes of the same integration by their string form.
    pub fn same_code(&self, other: &Self) -> bool {
        self.as_key() == other.as_key()
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_key())
    }
}

impl From<i64> for StatusCode {
    fn from(value: i64) -> Self {
        Self::Numeric(value)
    }
}

impl From<&str> for StatusCode {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for StatusCode {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Category a status belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCategory {
    Issuance,
    InTransit,
    Completed,
    Pending,
    Review,
    Warehouse,
    General,
    PreIssuance,
}

impl_wire_label_conversions!(StatusCategory {
    Issuance => "Emissao",
    InTransit => "Transito",
    Completed => "Finalizada",
    Pending => "PENDENCIA",
    Review => "Conferencia",
    Warehouse => "Deposito",
    General => "Geral",
    PreIssuance => "PRE-EMISSAO",
});

impl Serialize for StatusCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StatusCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

/// A `(code, label, category)` triple from one integration's vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusDescriptor {
    pub code: StatusCode,
    pub label: &'static str,
    pub category: StatusCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_textual_codes_share_a_key() {
        let numeric = StatusCode::from(10);
        let text = StatusCode::from(" 10 ");

        assert!(numeric.same_code(&text));
        assert_eq!(text.as_number(), Some(10));
        assert_ne!(numeric, text);
    }

    #[test]
    fn category_uses_wire_labels() {
        let json = serde_json::to_string(&StatusCategory::PreIssuance).unwrap();
        assert_eq!(json, r#""PRE-EMISSAO""#);

        let parsed: StatusCategory = serde_json::from_str(r#""pendencia""#).unwrap();
        assert_eq!(parsed, StatusCategory::Pending);
    }

    #[test]
    fn unknown_category_label_is_rejected() {
        let parsed: Result<StatusCategory, _> = serde_json::from_str(r#""Aereo""#);
        assert!(parsed.is_err());
    }
}
