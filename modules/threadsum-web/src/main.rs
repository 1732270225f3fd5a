use std::sync::Arc;

use anyhow::Result;
use axum::{
    http::{header, HeaderValue},
    routing::{get, post},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::info;

use threadsum_common::Config;
use threadsum_pipeline::{logging, ThreadPipeline};

mod components;
mod pages;
mod rest;

pub struct AppState {
    pub pipeline: ThreadPipeline,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/", get(pages::home_page).post(pages::summarize_page))
        .route("/api/summarize", post(rest::api_summarize))
        .with_state(state)
        // Summaries are per request; never cache them
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        // Method + path only; submitted URLs stay out of the span
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(logging::env_filter()?)
        .init();

    let config = Config::from_env()?;
    let addr = format!("{}:{}", config.web_host, config.web_port);

    let state = Arc::new(AppState {
        pipeline: ThreadPipeline::from_config(&config),
    });
    let app = build_router(state);

    info!("Thread summarizer starting on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
