//! HTTP plumbing shared by every integration client

mod client;
pub mod hooks;
mod redirect;

pub use client::{HttpClient, HttpClientBuilder};
pub use hooks::{BearerTokenHook, RequestHook, ResponseHook, ResponseMeta, UnauthorizedHook};
pub use redirect::RecordingRedirect;
