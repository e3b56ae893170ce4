//! Authentication against the auth-provider integration

mod service;

pub use service::{parse_expiry, AuthService};
