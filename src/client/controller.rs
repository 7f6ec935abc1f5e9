use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use crate::client::render::Report;
use crate::client::state::{Action, ClientError, ErrorKind, UiState};

/// True iff the string parses as an absolute URL with a scheme and host.
pub fn validate(url: &str) -> bool {
    match url::Url::parse(url) {
        Ok(parsed) => parsed.has_host(),
        Err(_) => false,
    }
}

/// Drives one submission at a time against the analyze endpoint.
pub struct Controller {
    http: Client,
    endpoint: String,
    state: UiState,
}

impl Controller {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Controller {
            http: Client::new(),
            endpoint: endpoint.into(),
            state: UiState::default(),
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// Validate and submit a URL.
    ///
    /// Empty or invalid input fails before any network call. Every exit path
    /// settles the state out of Loading, so the submit control is re-enabled
    /// no matter how the call ends.
    pub async fn submit(&mut self, url: &str) -> Result<Report, ClientError> {
        let url = url.trim();

        if url.is_empty() {
            return Err(self.fail(ClientError::new(ErrorKind::EmptyInput, None)));
        }
        if !validate(url) {
            return Err(self.fail(ClientError::new(ErrorKind::InvalidUrl, None)));
        }

        self.state.apply(Action::Submitted);

        match self.request(url).await {
            Ok(report) => {
                self.state.apply(Action::Succeeded(report.clone()));
                Ok(report)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    fn fail(&mut self, err: ClientError) -> ClientError {
        self.state.apply(Action::Failed(err.clone()));
        err
    }

    async fn request(&self, url: &str) -> Result<Report, ClientError> {
        let response = self
            .http
            .post(&self.endpoint)
            .json(&json!({ "url": url }))
            .send()
            .await
            .map_err(ClientError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            let kind = if status == StatusCode::NOT_FOUND {
                ErrorKind::NotFound
            } else {
                ErrorKind::ServerError
            };
            let detail = response.text().await.ok();
            return Err(ClientError::new(kind, detail));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|err| ClientError::new(ErrorKind::Unknown, Some(err.to_string())))?;

        Ok(Report::from_response(&body))
    }
}
