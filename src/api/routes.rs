use axum::{
    routing::post,
    Router,
    extract::{Json, State},
    response::IntoResponse,
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::services::ServeDir;

use crate::error::{Result, AppError};
use crate::api::models::AnalyzeRequest;
use crate::upstream;
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    let static_site = ServeDir::new(&app_state.config.static_dir);

    Router::new()
        .route("/api/analyze", post(analyze_handler))
        .fallback_service(static_site)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

async fn analyze_handler(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<impl IntoResponse> {
    // An absent or empty url never reaches the provider.
    let url = match req.url {
        Some(url) if !url.is_empty() => url,
        _ => return Err(AppError::MissingUrl),
    };

    tracing::info!(%url, "analyzing URL");

    let body = upstream::analyze(&state.http, &state.config, &url)
        .await
        .map_err(|err| {
            tracing::error!(%url, error = %err, "analysis failed");
            err
        })?;

    Ok(Json(body))
}
