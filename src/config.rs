use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::str::FromStr;
use crate::error::{AppError, Result};

/// Default analysis provider endpoint.
pub const DEFAULT_UPSTREAM_URL: &str = "https://api.textrazor.com";

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: SocketAddr,
    pub api_key: String,
    pub upstream_url: String,
    pub static_dir: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        // The provider key must come from the environment; startup fails
        // without it rather than shipping a fallback value.
        let api_key = env::var("TEXTRAZOR_API_KEY")
            .map_err(|_| AppError::Config("TEXTRAZOR_API_KEY is not set".to_string()))?;

        // Load server configuration with defaults
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "8000".to_string());
        let port = port.parse::<u16>().map_err(|e| AppError::Config(format!("Invalid port: {}", e)))?;
        let ip = IpAddr::from_str(&host).map_err(|e| AppError::Config(format!("Invalid host address: {}", e)))?;

        let upstream_url = env::var("TEXTRAZOR_API_URL")
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string());
        let static_dir = env::var("STATIC_DIR")
            .unwrap_or_else(|_| "static".to_string())
            .into();

        Ok(Config {
            server_addr: SocketAddr::new(ip, port),
            api_key,
            upstream_url,
            static_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Environment variables are process-global; these tests serialize on a
    // lock so they cannot interleave.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn load_fails_without_an_api_key() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        unsafe {
            env::remove_var("TEXTRAZOR_API_KEY");
        }

        let err = Config::load().unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        // There is no fallback key; startup must name what is missing.
        assert!(err.to_string().contains("TEXTRAZOR_API_KEY"));
    }

    #[test]
    fn load_reads_the_key_and_applies_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        unsafe {
            env::set_var("TEXTRAZOR_API_KEY", "key-from-env");
            env::remove_var("HOST");
            env::remove_var("PORT");
            env::remove_var("TEXTRAZOR_API_URL");
            env::remove_var("STATIC_DIR");
        }

        let config = Config::load().unwrap();
        assert_eq!(config.api_key, "key-from-env");
        assert_eq!(config.server_addr.port(), 8000);
        assert_eq!(config.upstream_url, DEFAULT_UPSTREAM_URL);
        assert_eq!(config.static_dir, PathBuf::from("static"));

        unsafe {
            env::remove_var("TEXTRAZOR_API_KEY");
        }
    }
}
