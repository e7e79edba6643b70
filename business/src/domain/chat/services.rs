use async_trait::async_trait;

use crate::domain::transcript::model::Transcript;

use super::errors::ChatError;
use super::model::Reply;

/// Service port for generating an assistant reply, optionally grounded on a
/// video transcript.
#[async_trait]
pub trait ReplyGeneratorService: Send + Sync {
    async fn generate(
        &self,
        message: &str,
        context: Option<Transcript>,
    ) -> Result<Reply, ChatError>;
}
