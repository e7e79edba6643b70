use async_trait::async_trait;

use super::errors::TranscriptError;
use super::model::Transcript;
use super::value_objects::VideoId;

/// Service port for fetching a video's caption track from YouTube.
#[async_trait]
pub trait TranscriptFetchService: Send + Sync {
    async fn fetch(&self, video_id: &VideoId) -> Result<Transcript, TranscriptError>;
}
