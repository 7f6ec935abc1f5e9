//! Shared helpers: a configurable stand-in for the analysis provider and a
//! test configuration pointing at it.

use std::sync::{Arc, Mutex};

use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;

use newslens::config::Config;

/// The last request the stand-in provider saw: headers plus raw form body.
pub type Captured = Arc<Mutex<Option<(HeaderMap, String)>>>;

/// Spawn a one-route provider that answers every POST to `/` with the given
/// status and body, recording what it received. Returns its base URL.
pub async fn spawn_upstream(status: StatusCode, body: &'static str) -> (String, Captured) {
    let captured: Captured = Arc::new(Mutex::new(None));

    let app = Router::new().route(
        "/",
        post({
            let captured = captured.clone();
            move |headers: HeaderMap, request_body: String| {
                let captured = captured.clone();
                async move {
                    *captured.lock().unwrap() = Some((headers, request_body));
                    (status, body)
                }
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), captured)
}

pub fn test_config(upstream_url: String) -> Config {
    Config {
        server_addr: "127.0.0.1:0".parse().unwrap(),
        api_key: "test-key".to_string(),
        upstream_url,
        static_dir: "static".into(),
    }
}
