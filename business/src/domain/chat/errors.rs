#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("chat.message_required")]
    MessageRequired,
    #[error("chat.empty_reply")]
    EmptyReply,
    #[error("chat.generation_failed")]
    GenerationFailed,
    #[error("chat.transcript_unavailable")]
    TranscriptUnavailable,
}
