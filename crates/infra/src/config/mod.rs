//! Application configuration sources
//!
//! Environment variables win over config files; with neither, the client
//! points at local development backends.

pub mod loader;

pub use loader::{load, load_from_env, load_from_file, find_config_file};
