use async_trait::async_trait;
use tokio::sync::RwLock;

use business::domain::errors::RepositoryError;
use business::domain::session::repository::SessionRepository;
use business::domain::transcript::model::Transcript;

/// In-memory session store: one rolling transcript per process.
///
/// State lives only as long as the process; a restart starts a fresh
/// conversation.
pub struct SessionRepositoryInMemory {
    transcript: RwLock<Option<Transcript>>,
}

impl SessionRepositoryInMemory {
    pub fn new() -> Self {
        Self {
            transcript: RwLock::new(None),
        }
    }
}

impl Default for SessionRepositoryInMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionRepository for SessionRepositoryInMemory {
    async fn save(&self, transcript: &Transcript) -> Result<(), RepositoryError> {
        let mut current = self.transcript.write().await;
        *current = Some(transcript.clone());
        Ok(())
    }

    async fn current(&self) -> Result<Option<Transcript>, RepositoryError> {
        let current = self.transcript.read().await;
        Ok(current.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::transcript::value_objects::VideoId;
    use chrono::Utc;

    fn transcript(video_id: &str, text: &str) -> Transcript {
        Transcript {
            video_id: VideoId::new(video_id).unwrap(),
            text: text.to_string(),
            fetched_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn should_start_with_no_transcript() {
        let repository = SessionRepositoryInMemory::new();

        let current = repository.current().await.unwrap();
        assert!(current.is_none());
    }

    #[tokio::test]
    async fn should_return_saved_transcript() {
        let repository = SessionRepositoryInMemory::new();
        repository
            .save(&transcript("dQw4w9WgXcQ", "never gonna give you up"))
            .await
            .unwrap();

        let current = repository.current().await.unwrap().unwrap();
        assert_eq!(current.video_id.as_str(), "dQw4w9WgXcQ");
        assert_eq!(current.text, "never gonna give you up");
    }

    #[tokio::test]
    async fn should_replace_transcript_when_new_video_saved() {
        let repository = SessionRepositoryInMemory::new();
        repository
            .save(&transcript("dQw4w9WgXcQ", "first video"))
            .await
            .unwrap();
        repository
            .save(&transcript("abc123XYZ_-", "second video"))
            .await
            .unwrap();

        let current = repository.current().await.unwrap().unwrap();
        assert_eq!(current.video_id.as_str(), "abc123XYZ_-");
        assert_eq!(current.text, "second video");
    }
}
