use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::transcript::errors::TranscriptError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

// Transcript failures all map to 400: from the caller's point of view the
// request named a video whose transcript cannot be served.
impl IntoErrorResponse for TranscriptError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            TranscriptError::InvalidVideoId => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "transcript.invalid_video_id",
            ),
            TranscriptError::NotAvailable => (
                StatusCode::BAD_REQUEST,
                "TranscriptError",
                "transcript.not_available",
            ),
            TranscriptError::FetchFailed => (
                StatusCode::BAD_REQUEST,
                "FetchError",
                "transcript.fetch_failed",
            ),
        };

        (
            status,
            Json(ErrorResponse {
                name: name.to_string(),
                message: message.to_string(),
            }),
        )
    }
}
