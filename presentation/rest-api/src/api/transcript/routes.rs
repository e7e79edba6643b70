use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::transcript::use_cases::get_transcript::{
    GetTranscriptParams, GetTranscriptUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;
use crate::api::transcript::dto::TranscriptResponse;

// Example id used by the interactive docs when no video id is given.
const DEFAULT_VIDEO_ID: &str = "dQw4w9WgXcQ";

pub struct TranscriptApi {
    get_transcript_use_case: Arc<dyn GetTranscriptUseCase>,
}

impl TranscriptApi {
    pub fn new(get_transcript_use_case: Arc<dyn GetTranscriptUseCase>) -> Self {
        Self {
            get_transcript_use_case,
        }
    }
}

/// Transcript API
///
/// Endpoints for extracting transcripts from YouTube videos.
#[OpenApi]
impl TranscriptApi {
    /// Get YouTube video transcript
    ///
    /// Extracts the transcript from a YouTube video given its ID
    /// (e.g. dQw4w9WgXcQ from youtube.com/watch?v=dQw4w9WgXcQ).
    #[oai(path = "/transcript/", method = "get", tag = "ApiTags::Transcripts")]
    async fn get_transcript(
        &self,
        /// The YouTube video ID
        video_id: Query<Option<String>>,
    ) -> GetTranscriptResponse {
        let params = GetTranscriptParams {
            video_id: video_id.0.unwrap_or_else(|| DEFAULT_VIDEO_ID.to_string()),
        };

        match self.get_transcript_use_case.execute(params).await {
            Ok(transcript) => GetTranscriptResponse::Ok(Json(transcript.into())),
            Err(err) => {
                let (_, json) = err.into_error_response();
                GetTranscriptResponse::BadRequest(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetTranscriptResponse {
    #[oai(status = 200)]
    Ok(Json<TranscriptResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}
