//! One-shot command-line front end for the analysis service.
//!
//! Validates a URL, submits it to a running server, and prints the rendered
//! report. The endpoint defaults to a local server and can be overridden
//! with `NEWSLENS_ENDPOINT`.

use std::env;
use std::process::ExitCode;

use newslens::client::Controller;

#[tokio::main]
async fn main() -> ExitCode {
    let mut args = env::args().skip(1);
    let url = match args.next() {
        Some(url) => url,
        None => {
            eprintln!("usage: analyze <url>");
            return ExitCode::FAILURE;
        }
    };

    let endpoint = env::var("NEWSLENS_ENDPOINT")
        .unwrap_or_else(|_| "http://127.0.0.1:8000/api/analyze".to_string());

    let mut controller = Controller::new(endpoint);
    match controller.submit(&url).await {
        Ok(report) => {
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err);
            if let Some(detail) = &err.detail {
                eprintln!("  {}", detail);
            }
            ExitCode::FAILURE
        }
    }
}
