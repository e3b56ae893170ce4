//! Client-side shipment filtering
//!
//! Search term plus status multi-select, applied to whatever a list endpoint
//! returned. Each integration decides which of its fields are searchable.

use std::borrow::Cow;

use cargas_domain::{CentauroShipment, NikeShipment, StatusCode};

/// A shipment that can be matched by [`ShipmentFilter`].
pub trait Searchable {
    /// Text fields the search term is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// Current status code, if the backend sent one.
    fn status_code(&self) -> Option<&StatusCode>;
}

impl Searchable for NikeShipment {
    fn search_fields(&self) -> Vec<&str> {
        let parties = [self.rem.as_ref(), self.dest.as_ref()];
        self.external_ref
            .as_deref()
            .into_iter()
            .chain(parties.into_iter().flatten().flat_map(|actor| {
                [actor.document.as_deref(), actor.name.as_deref()].into_iter().flatten()
            }))
            .collect()
    }

    fn status_code(&self) -> Option<&StatusCode> {
        self.status.as_ref().map(|status| &status.codigo)
    }
}

impl Searchable for CentauroShipment {
    fn search_fields(&self) -> Vec<&str> {
        [
            self.external_id.as_deref(),
            self.client_id.as_deref(),
            self.origin_city.as_ref().and_then(|city| city.municipio.as_deref()),
            self.destination_city.as_ref().and_then(|city| city.municipio.as_deref()),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn status_code(&self) -> Option<&StatusCode> {
        self.status.as_ref().map(|status| &status.code)
    }
}

/// Search term and selected status codes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShipmentFilter {
    pub search: String,
    pub statuses: Vec<StatusCode>,
}

impl ShipmentFilter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    #[must_use]
    pub fn with_status(mut self, code: impl Into<StatusCode>) -> Self {
        self.statuses.push(code.into());
        self
    }

    /// True when neither a search term nor a status is set.
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.statuses.is_empty()
    }

    /// Search term matches (an empty term always does) and, when statuses are
    /// selected, the shipment's status is one of them.
    pub fn matches<S: Searchable>(&self, shipment: &S) -> bool {
        self.matches_search(shipment) && self.matches_status(shipment)
    }

    /// Shipments that match, in their original order.
    pub fn apply<'a, S: Searchable>(&self, shipments: &'a [S]) -> Vec<&'a S> {
        shipments.iter().filter(|shipment| self.matches(*shipment)).collect()
    }

    fn matches_search<S: Searchable>(&self, shipment: &S) -> bool {
        let term = self.search.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        shipment.search_fields().iter().any(|field| field.to_lowercase().contains(&term))
    }

    fn matches_status<S: Searchable>(&self, shipment: &S) -> bool {
        if self.statuses.is_empty() {
            return true;
        }
        let Some(code) = shipment.status_code() else {
            return false;
        };
        let key: Cow<'_, str> = code.as_key();
        self.statuses.iter().any(|selected| selected.as_key() == key)
    }
}
