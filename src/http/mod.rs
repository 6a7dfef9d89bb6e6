//! HTTP transport and failure classification for API calls.

mod client;
mod failure;

#[cfg(test)]
pub use client::MockTransport;
pub use client::{HttpClient, Reply, Transport, USER_AGENT, build_http_client};
pub use failure::{CallFailure, classify};
