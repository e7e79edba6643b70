#[derive(Debug, thiserror::Error)]
pub enum TranscriptError {
    #[error("transcript.invalid_video_id")]
    InvalidVideoId,
    #[error("transcript.not_available")]
    NotAvailable,
    #[error("transcript.fetch_failed")]
    FetchFailed,
}
