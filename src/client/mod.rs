//! HTTP client for the estimation service.
//!
//! The service exposes a single endpoint, `POST {endpoint}/estimate`, taking
//! the mask grid and the rectangle multiset and answering with per-cell
//! probability and entropy fields. No authentication, no streaming; one
//! request, one response.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Grid, InferenceResult, Rectangle};
use crate::services::EstimateBackend;

/// The request body for one estimation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// The current mask; `true` cells are still buried.
    pub mask: Grid<bool>,
    /// One rectangle per expected item, order without meaning.
    pub rectangles: Vec<Rectangle>,
}

/// Blocking HTTP backend for the estimation service.
///
/// Runs on the orchestrator's worker thread, never on the event loop.
pub struct HttpEstimateClient {
    endpoint: String,
    client: Client,
}

impl HttpEstimateClient {
    /// Creates a client for the service at `endpoint`.
    ///
    /// The timeout is a hardening measure so a hung service surfaces as an
    /// ordinary request failure instead of waiting forever.
    ///
    /// # Errors
    ///
    /// Fails when the underlying HTTP client cannot be constructed.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn estimate_url(&self) -> String {
        format!("{}/estimate", self.endpoint)
    }
}

impl EstimateBackend for HttpEstimateClient {
    fn estimate(&self, request: &EstimateRequest) -> Result<InferenceResult> {
        let url = self.estimate_url();
        debug!(%url, "posting estimation request");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .with_context(|| format!("Failed to reach estimation service at {url}"))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("Estimation service returned {status}");
        }

        response
            .json::<InferenceResult>()
            .context("Failed to decode estimation response")
    }
}
