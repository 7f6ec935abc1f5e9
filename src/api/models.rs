use serde::Deserialize;

/// Body of `POST /api/analyze`.
///
/// `url` is optional at the wire level so a missing field reaches the handler
/// and gets the service's own 400 instead of a deserialization rejection.
#[derive(Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub url: Option<String>,
}
