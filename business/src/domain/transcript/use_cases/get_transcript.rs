use async_trait::async_trait;

use crate::domain::transcript::errors::TranscriptError;
use crate::domain::transcript::model::Transcript;

pub struct GetTranscriptParams {
    pub video_id: String,
}

#[async_trait]
pub trait GetTranscriptUseCase: Send + Sync {
    async fn execute(&self, params: GetTranscriptParams) -> Result<Transcript, TranscriptError>;
}
