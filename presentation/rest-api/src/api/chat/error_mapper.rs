use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::chat::errors::ChatError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ChatError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ChatError::MessageRequired => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "chat.message_required",
            ),
            ChatError::EmptyReply => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "GenerationError",
                "chat.empty_reply",
            ),
            ChatError::GenerationFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "GenerationError",
                "chat.generation_failed",
            ),
            ChatError::TranscriptUnavailable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "TranscriptError",
                "chat.transcript_unavailable",
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
