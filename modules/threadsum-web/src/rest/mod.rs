use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use tracing::{warn, Instrument};
use uuid::Uuid;

use threadsum_common::ThreadSumError;

use crate::AppState;

#[derive(Deserialize)]
pub struct SummarizeRequest {
    url: String,
}

pub fn status_for(err: &ThreadSumError) -> StatusCode {
    match err {
        ThreadSumError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
        ThreadSumError::EmptyThread { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        ThreadSumError::MissingCredential(_) => StatusCode::SERVICE_UNAVAILABLE,
        ThreadSumError::Upstream(_) => StatusCode::BAD_GATEWAY,
    }
}

pub async fn api_summarize(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SummarizeRequest>,
) -> Response {
    let url = body.url.trim();
    if url.is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(serde_json::json!({"error": "url is required", "kind": "empty_url"})),
        )
            .into_response();
    }

    let span = tracing::info_span!("summarize", request_id = %Uuid::new_v4());
    match state.pipeline.run(url).instrument(span).await {
        Ok(result) => Json(serde_json::json!({
            "summary": result.summary,
            "thread": result.thread.rendered(),
            "username": result.thread.username,
            "root_id": result.thread.root_id,
            "engagement": result.thread.engagement,
        }))
        .into_response(),
        Err(e) => {
            warn!(kind = e.kind(), error = %e, "Summarize API request failed");
            (
                status_for(&e),
                Json(serde_json::json!({"error": e.to_string(), "kind": e.kind()})),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_covers_every_kind() {
        assert_eq!(
            status_for(&ThreadSumError::InvalidUrl("x".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&ThreadSumError::EmptyThread {
                username: "jack".into()
            }),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_for(&ThreadSumError::MissingCredential("OPENAI_API_KEY".into())),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_for(&ThreadSumError::Upstream("boom".into())),
            StatusCode::BAD_GATEWAY
        );
    }
}
