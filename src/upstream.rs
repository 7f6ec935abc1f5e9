//! Client for the text-analysis provider.

use reqwest::Client;
use serde_json::Value;

use crate::config::Config;
use crate::error::{Result, AppError};

/// Extractors requested from the provider on every call.
const EXTRACTORS: &str = "entities,topics,phrases";

/// Header carrying the provider API key.
const API_KEY_HEADER: &str = "x-textrazor-key";

/// Forward a URL to the analysis provider and return its JSON body verbatim.
///
/// A single best-effort pass: a non-2xx status or a transport failure is
/// surfaced to the caller, never retried.
pub async fn analyze(client: &Client, config: &Config, url: &str) -> Result<Value> {
    let params = [("extractors", EXTRACTORS), ("url", url)];

    let response = client
        .post(&config.upstream_url)
        .header(API_KEY_HEADER, &config.api_key)
        .form(&params)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let status_text = status
            .canonical_reason()
            .map(str::to_owned)
            .unwrap_or_else(|| status.to_string());
        let details = response.text().await.unwrap_or_default();
        return Err(AppError::Upstream {
            status: status_text,
            details,
        });
    }

    Ok(response.json().await?)
}
