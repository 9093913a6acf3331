use reqwest::Client;
use std::time::Duration;

use crate::error::{AppError, Result};

/// Identifying user agent sent with every request.
pub const USER_AGENT: &str = concat!("seolupp/", env!("CARGO_PKG_VERSION"));

/// Factory for the crawl-wide HTTP client. One immutable configuration per
/// crawl: fixed user agent, per-request timeout, redirects followed.
pub fn create_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(|e| AppError::network(format!("failed to build HTTP client: {e}")))
}
