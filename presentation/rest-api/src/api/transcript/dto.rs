use poem_openapi::Object;

use business::domain::transcript::model::Transcript;

#[derive(Debug, Clone, Object)]
pub struct TranscriptResponse {
    /// YouTube video identifier
    pub video_id: String,
    /// Full caption text of the video
    pub transcript: String,
}

impl From<Transcript> for TranscriptResponse {
    fn from(t: Transcript) -> Self {
        Self {
            video_id: t.video_id.to_string(),
            transcript: t.text,
        }
    }
}
