use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::transcript::model::Transcript;

/// Conversation context shared across chat requests.
///
/// Holds at most one transcript: fetching a new video replaces the previous
/// one, matching a single rolling conversation per process.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn save(&self, transcript: &Transcript) -> Result<(), RepositoryError>;
    async fn current(&self) -> Result<Option<Transcript>, RepositoryError>;
}
