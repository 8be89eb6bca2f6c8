//! Voice endpoints: speech-to-text upload and text-to-speech synthesis

use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use super::{ApiError, ApiState};

/// Build voice router
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/api/speech", post(speech_to_text))
        .route("/api/tts", post(text_to_speech))
        .with_state(state)
}

/// Transcription response
#[derive(Debug, Serialize)]
pub struct TranscribeResponse {
    pub text: String,
}

/// Receive an audio upload and return the transcribed text
async fn speech_to_text(
    State(state): State<Arc<ApiState>>,
    mut multipart: Multipart,
) -> Result<Json<TranscribeResponse>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("invalid multipart upload: {e}")))?
    {
        if field.name() == Some("audio") {
            let filename = field.file_name().map(ToString::to_string);
            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::bad_request(format!("failed to read audio field: {e}")))?;

            tracing::info!(filename = ?filename, "received audio file");

            let text = state.stt.transcribe(&data);
            return Ok(Json(TranscribeResponse { text }));
        }
    }

    Err(ApiError::bad_request("missing audio file upload"))
}

/// Synthesis request
#[derive(Debug, Deserialize)]
pub struct TtsRequest {
    pub text: String,
    #[serde(default)]
    pub voice_id: Option<String>,
}

/// Convert text to speech and return audio bytes
async fn text_to_speech(
    State(state): State<Arc<ApiState>>,
    Json(request): Json<TtsRequest>,
) -> Response {
    tracing::info!(chars = request.text.len(), voice_id = ?request.voice_id, "tts request received");

    let audio = state.tts.synthesize(&request.text);

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "audio/mpeg")],
        audio,
    )
        .into_response()
}
