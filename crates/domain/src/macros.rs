//! Macro for implementing Display and FromStr for wire-labelled enums
//!
//! Backends exchange category names as fixed labels ("Transito",
//! "PENDENCIA", "PRE-EMISSAO"). This macro maps each variant to its label
//! once and derives `as_str`, `Display` and case-insensitive `FromStr` from
//! that single table.
//!
//! # Example
//!
//! ```rust
//! use cargas_domain::impl_wire_label_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Lane {
//!     Road,
//!     Air,
//! }
//!
//! impl_wire_label_conversions!(Lane {
//!     Road => "Rodoviario",
//!     Air => "AEREO",
//! });
//!
//! assert_eq!(Lane::Air.to_string(), "AEREO");
//! assert_eq!("rodoviario".parse::<Lane>(), Ok(Lane::Road));
//! ```

/// Implements `as_str`, Display and FromStr for label enums
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their wire labels
///
/// # Features
///
/// - Case-insensitive parsing ("TRANSITO", "transito", "Transito" all work)
/// - Display writes the label exactly as registered
/// - Descriptive error messages with enum name
#[macro_export]
macro_rules! impl_wire_label_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Wire label of this variant.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(if s.eq_ignore_ascii_case($str) {
                    return Ok(Self::$variant);
                })+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}
