use chrono::{DateTime, Utc};

use super::errors::TranscriptError;
use super::value_objects::VideoId;

/// Caption text of a YouTube video, joined into a single plain-text string.
#[derive(Debug, Clone)]
pub struct Transcript {
    pub video_id: VideoId,
    pub text: String,
    pub fetched_at: DateTime<Utc>,
}

/// Creates a new Transcript with validation.
pub fn create_transcript(video_id: VideoId, text: String) -> Result<Transcript, TranscriptError> {
    if text.trim().is_empty() {
        return Err(TranscriptError::NotAvailable);
    }

    Ok(Transcript {
        video_id,
        text: text.trim().to_string(),
        fetched_at: Utc::now(),
    })
}
