pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod upstream;

use std::sync::Arc;
use config::Config;

/// Application state that will be shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            config: Arc::new(config),
            http: reqwest::Client::new(),
        }
    }
}
