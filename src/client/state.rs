use crate::client::render::Report;

/// Lifecycle of one submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UiStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Failure classes the controller can surface.
///
/// Produced by the network layer as typed values, not recovered from error
/// text after the fact.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Submit pressed with an empty input; no request is made.
    EmptyInput,
    /// Input does not parse as an absolute URL; no request is made.
    InvalidUrl,
    /// The analyze endpoint answered 404.
    NotFound,
    /// The service could not be reached at all.
    Unreachable,
    /// The service answered with some other error status.
    ServerError,
    /// Anything else, including a malformed response body.
    Unknown,
}

impl ErrorKind {
    /// Fixed user-facing message for this failure class.
    pub fn user_message(self) -> &'static str {
        match self {
            ErrorKind::EmptyInput => "Please enter a URL",
            ErrorKind::InvalidUrl => "Please enter a valid URL",
            ErrorKind::NotFound => {
                "Endpoint not found. Ensure the backend is correctly configured."
            }
            ErrorKind::Unreachable => {
                "Server connection failed. Verify that the backend server is running."
            }
            ErrorKind::ServerError | ErrorKind::Unknown => {
                "An unexpected error occurred. Please try again later."
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{}", .kind.user_message())]
pub struct ClientError {
    pub kind: ErrorKind,
    pub detail: Option<String>,
}

impl ClientError {
    pub fn new(kind: ErrorKind, detail: Option<String>) -> Self {
        ClientError { kind, detail }
    }

    /// Classify a transport-level failure from the HTTP client.
    pub fn from_transport(err: reqwest::Error) -> Self {
        let kind = if err.is_connect() || err.is_timeout() {
            ErrorKind::Unreachable
        } else {
            ErrorKind::Unknown
        };
        ClientError::new(kind, Some(err.to_string()))
    }
}

/// State transitions; [`UiState::apply`] is the only way state changes.
#[derive(Debug)]
pub enum Action {
    Submitted,
    Succeeded(Report),
    Failed(ClientError),
}

/// Explicit controller state; nothing else holds submission state.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub status: UiStatus,
    pub last_error: Option<ClientError>,
    pub last_result: Option<Report>,
}

impl UiState {
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Submitted => {
                self.status = UiStatus::Loading;
                self.last_error = None;
            }
            Action::Succeeded(report) => {
                self.status = UiStatus::Success;
                self.last_result = Some(report);
            }
            Action::Failed(err) => {
                self.status = UiStatus::Error;
                self.last_error = Some(err);
            }
        }
    }

    /// The submit control is enabled whenever no call is outstanding.
    pub fn submit_enabled(&self) -> bool {
        self.status != UiStatus::Loading
    }
}
