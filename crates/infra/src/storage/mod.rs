//! Session storage backends

mod file;

pub use file::{FileSessionStorage, FileStorageError};
