//! Single-page fetching with outcome classification.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use reqwest::{Client, StatusCode};
use url::Url;

use crate::domain::models::FetchOutcome;
use crate::error::Result;
use crate::service::http::create_client;

pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: create_client(timeout)?,
        })
    }

    /// Fetch one address. Never returns an error: transport failures and
    /// non-200 statuses come back as `FetchOutcome` variants so the caller
    /// can keep crawling.
    pub async fn fetch(&self, url: &Url) -> FetchOutcome {
        let started = Instant::now();

        let response = match self.client.get(url.clone()).send().await {
            Ok(response) => response,
            Err(e) => {
                log::warn!("[FETCH] Request failed for {}: {}", url, e);
                return FetchOutcome::TransportError {
                    message: e.to_string(),
                };
            }
        };

        let status = response.status();
        let final_url = response.url().clone();

        if status != StatusCode::OK {
            log::debug!("[FETCH] {} -> HTTP {}", url, status.as_u16());
            return FetchOutcome::HttpError {
                status: status.as_u16(),
                final_url,
            };
        }

        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect::<BTreeMap<_, _>>();

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                log::warn!("[FETCH] Failed to read body for {}: {}", url, e);
                return FetchOutcome::TransportError {
                    message: e.to_string(),
                };
            }
        };

        let elapsed = started.elapsed();
        log::debug!("[FETCH] {} -> 200 ({} bytes in {:?})", url, body.len(), elapsed);

        FetchOutcome::Success {
            status: status.as_u16(),
            elapsed,
            final_url,
            headers,
            body,
        }
    }
}
