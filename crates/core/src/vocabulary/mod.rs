//! Per-integration status vocabularies
//!
//! Each backend has its own fixed status table. Codes overlap in value but
//! not in meaning (code 5 is a return to origin in one table and total
//! damage in the other), so a vocabulary is always tied to the integration it
//! came from and there is no API that compares codes across vocabularies.

mod centauro;
mod nike;

use cargas_domain::constants::{INTEGRATION_CENTAURO, INTEGRATION_NIKE, UNKNOWN_STATUS_LABEL};
use cargas_domain::{StatusCategory, StatusCode, StatusDescriptor};

#[derive(Debug, Clone, Copy)]
enum Table {
    Numeric(&'static [(i64, &'static str, StatusCategory)]),
    Text(&'static [(&'static str, &'static str, StatusCategory)]),
}

/// Status table of one integration.
#[derive(Debug, Clone, Copy)]
pub struct StatusVocabulary {
    integration_id: &'static str,
    table: Table,
}

impl StatusVocabulary {
    /// Vocabulary of the auth-provider backend (numeric codes).
    pub const fn nike() -> Self {
        Self { integration_id: INTEGRATION_NIKE, table: Table::Numeric(nike::STATUS_CODES) }
    }

    /// Vocabulary of the second backend (string codes).
    pub const fn centauro() -> Self {
        Self { integration_id: INTEGRATION_CENTAURO, table: Table::Text(centauro::STATUS_CODES) }
    }

    /// Vocabulary for a registered integration id.
    pub fn for_integration(id: &str) -> Option<Self> {
        match id {
            INTEGRATION_NIKE => Some(Self::nike()),
            INTEGRATION_CENTAURO => Some(Self::centauro()),
            _ => None,
        }
    }

    pub const fn integration_id(&self) -> &'static str {
        self.integration_id
    }

    /// Describe a code. Total: unknown codes map to the "unknown" sentinel
    /// with category [`StatusCategory::General`].
    pub fn describe(&self, code: &StatusCode) -> StatusDescriptor {
        self.lookup(code).unwrap_or_else(|| StatusDescriptor {
            code: code.clone(),
            label: UNKNOWN_STATUS_LABEL,
            category: StatusCategory::General,
        })
    }

    /// The table entry for `code`, if the integration knows it.
    pub fn lookup(&self, code: &StatusCode) -> Option<StatusDescriptor> {
        match self.table {
            Table::Numeric(entries) => code.as_number().and_then(|number| {
                entries
                    .iter()
                    .find(|(entry_code, _, _)| *entry_code == number)
                    .map(|&(entry_code, label, category)| StatusDescriptor {
                        code: StatusCode::Numeric(entry_code),
                        label,
                        category,
                    })
            }),
            Table::Text(entries) => {
                let key = code.as_key();
                entries.iter().find(|(entry_code, _, _)| *entry_code == key).map(
                    |&(entry_code, label, category)| StatusDescriptor {
                        code: StatusCode::Text(entry_code.to_string()),
                        label,
                        category,
                    },
                )
            }
        }
    }

    /// Every status of the table, in table order.
    pub fn entries(&self) -> Vec<StatusDescriptor> {
        match self.table {
            Table::Numeric(entries) => entries
                .iter()
                .map(|&(code, label, category)| StatusDescriptor {
                    code: StatusCode::Numeric(code),
                    label,
                    category,
                })
                .collect(),
            Table::Text(entries) => entries
                .iter()
                .map(|&(code, label, category)| StatusDescriptor {
                    code: StatusCode::Text(code.to_string()),
                    label,
                    category,
                })
                .collect(),
        }
    }

    /// Distinct categories present in the table, sorted by wire label.
    pub fn categories(&self) -> Vec<StatusCategory> {
        let mut categories: Vec<StatusCategory> = match self.table {
            Table::Numeric(entries) => entries.iter().map(|(_, _, category)| *category).collect(),
            Table::Text(entries) => entries.iter().map(|(_, _, category)| *category).collect(),
        };
        categories.sort_by_key(StatusCategory::as_str);
        categories.dedup();
        categories
    }

    /// Entries in `category`, in table order.
    pub fn by_category(&self, category: StatusCategory) -> Vec<StatusDescriptor> {
        self.entries().into_iter().filter(|entry| entry.category == category).collect()
    }

    /// Statuses whose label contains `term` (case-insensitive) or whose code
    /// contains it. An empty term returns the whole table.
    pub fn search(&self, term: &str) -> Vec<StatusDescriptor> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return self.entries();
        }
        self.entries()
            .into_iter()
            .filter(|entry| {
                entry.label.to_lowercase().contains(&term) || entry.code.as_key().contains(&term)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn describe_known_nike_code() {
        let descriptor = StatusVocabulary::nike().describe(&StatusCode::from(25));
        assert_eq!(descriptor.label, "EM ROTA DE ENTREGA");
        assert_eq!(descriptor.category, StatusCategory::InTransit);
    }

    #[test]
    fn nike_accepts_textual_numeric_codes() {
        let descriptor = StatusVocabulary::nike().describe(&StatusCode::from("10"));
        assert_eq!(descriptor.label, "MINUTA EMITIDA");
        assert_eq!(descriptor.code, StatusCode::Numeric(10));
    }

    #[test]
    fn describe_is_total() {
        let unknown = [
            StatusCode::from(999_999),
            StatusCode::from(-1),
            StatusCode::from("abc"),
            StatusCode::from(""),
        ];
        for vocabulary in [StatusVocabulary::nike(), StatusVocabulary::centauro()] {
            for code in &unknown {
                let descriptor = vocabulary.describe(code);
                assert_eq!(descriptor.category, StatusCategory::General);
                assert!(!descriptor.label.is_empty());
                assert_eq!(&descriptor.code, code);
            }
        }
    }

    #[test]
    fn lookup_only_finds_table_entries() {
        assert!(StatusVocabulary::nike().lookup(&StatusCode::from(25)).is_some());
        assert!(StatusVocabulary::nike().lookup(&StatusCode::from("abc")).is_none());
        assert!(StatusVocabulary::centauro().lookup(&StatusCode::from(999_999)).is_none());
    }

    #[test]
    fn same_code_means_different_things_per_integration() {
        let code = StatusCode::from(5);
        let nike = StatusVocabulary::nike().describe(&code);
        let centauro = StatusVocabulary::centauro().describe(&code);

        assert_eq!(nike.label, "DEVOLUÇÃO/RETORNO FILIAL ORIGEM");
        assert_eq!(centauro.label, "AVARIA TOTAL");
        assert_ne!(nike.label, centauro.label);
    }

    #[test]
    fn category_membership_differs_per_integration() {
        let code = StatusCode::from(174);
        assert_eq!(StatusVocabulary::nike().describe(&code).category, StatusCategory::Completed);
        assert_eq!(
            StatusVocabulary::centauro().describe(&code).category,
            StatusCategory::Warehouse
        );
    }

    #[test]
    fn categories_are_distinct_and_sorted() {
        let categories = StatusVocabulary::centauro().categories();
        let labels: Vec<&str> = categories.iter().map(StatusCategory::as_str).collect();
        assert_eq!(
            labels,
            vec![
                "Conferencia",
                "Deposito",
                "Emissao",
                "Finalizada",
                "Geral",
                "PENDENCIA",
                "PRE-EMISSAO",
                "Transito"
            ]
        );

        let nike: HashSet<StatusCategory> =
            StatusVocabulary::nike().categories().into_iter().collect();
        assert_eq!(nike.len(), 5);
        assert!(!nike.contains(&StatusCategory::Warehouse));
    }

    #[test]
    fn tables_have_unique_codes() {
        for vocabulary in [StatusVocabulary::nike(), StatusVocabulary::centauro()] {
            let entries = vocabulary.entries();
            let keys: HashSet<String> =
                entries.iter().map(|entry| entry.code.as_key().into_owned()).collect();
            assert_eq!(keys.len(), entries.len(), "{}", vocabulary.integration_id());
        }
    }

    #[test]
    fn search_matches_label_or_code() {
        let vocabulary = StatusVocabulary::nike();

        let by_label = vocabulary.search("roubo");
        assert_eq!(by_label.len(), 1);
        assert_eq!(by_label[0].code, StatusCode::Numeric(18));

        let by_code = vocabulary.search("67");
        let codes: Vec<String> = by_code.iter().map(|e| e.code.to_string()).collect();
        assert!(codes.contains(&"67".to_string()));
        assert!(codes.contains(&"667".to_string()));

        assert_eq!(vocabulary.search("  ").len(), vocabulary.entries().len());
    }

    #[test]
    fn by_category_filters_table() {
        let review = StatusVocabulary::nike().by_category(StatusCategory::Review);
        assert_eq!(review.len(), 6);
        assert!(review.iter().all(|entry| entry.category == StatusCategory::Review));
    }

    #[test]
    fn for_integration_resolves_builtin_ids() {
        assert_eq!(
            StatusVocabulary::for_integration(INTEGRATION_CENTAURO).map(|v| v.integration_id()),
            Some(INTEGRATION_CENTAURO)
        );
        assert!(StatusVocabulary::for_integration("other").is_none());
    }
}
