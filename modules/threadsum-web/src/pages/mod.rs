use std::sync::Arc;

use axum::{
    extract::{Form, State},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::{warn, Instrument};
use uuid::Uuid;

use crate::components::{render_summary_page, PageView};
use crate::rest::status_for;
use crate::AppState;

pub const FALLBACK_MESSAGE: &str =
    "Mohon masukkan URL thread Twitter yang valid untuk menampilkan ringkasan.";

/// User-facing text for each `ThreadSumError::kind()`.
pub fn error_message(kind: &str) -> &'static str {
    match kind {
        "invalid_url" => {
            "URL tidak valid. Gunakan format https://twitter.com/username/status/1234567890."
        }
        "empty_thread" => {
            "Tidak ada tweet dari pemilik thread yang bisa diambil. Coba thread lain ya."
        }
        "missing_credential" => {
            "Layanan belum dikonfigurasi dengan benar (API key tidak ditemukan)."
        }
        _ => "Gagal menghubungi layanan eksternal. Silakan coba lagi nanti.",
    }
}

#[derive(Deserialize)]
pub struct SummarizeForm {
    #[serde(default)]
    url: String,
}

pub async fn home_page() -> Html<String> {
    Html(render_summary_page(PageView::default()))
}

pub async fn summarize_page(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SummarizeForm>,
) -> Response {
    let url = form.url.trim().to_string();
    if url.is_empty() {
        return Html(render_summary_page(PageView {
            notice: Some(FALLBACK_MESSAGE.to_string()),
            ..Default::default()
        }))
        .into_response();
    }

    let span = tracing::info_span!("summarize", request_id = %Uuid::new_v4());
    match state.pipeline.run(&url).instrument(span).await {
        Ok(result) => Html(render_summary_page(PageView {
            summary: Some(result.summary).filter(|s| !s.trim().is_empty()),
            thread: Some(result.thread.rendered()),
            url,
            ..Default::default()
        }))
        .into_response(),
        Err(e) => {
            warn!(kind = e.kind(), error = %e, "Summarize form request failed");
            let html = render_summary_page(PageView {
                url,
                error: Some(error_message(e.kind()).to_string()),
                ..Default::default()
            });
            (status_for(&e), Html(html)).into_response()
        }
    }
}
