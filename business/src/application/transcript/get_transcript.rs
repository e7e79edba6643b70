use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::transcript::errors::TranscriptError;
use crate::domain::transcript::model::Transcript;
use crate::domain::transcript::services::TranscriptFetchService;
use crate::domain::transcript::use_cases::get_transcript::{
    GetTranscriptParams, GetTranscriptUseCase,
};
use crate::domain::transcript::value_objects::VideoId;

pub struct GetTranscriptUseCaseImpl {
    pub fetcher: Arc<dyn TranscriptFetchService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetTranscriptUseCase for GetTranscriptUseCaseImpl {
    async fn execute(&self, params: GetTranscriptParams) -> Result<Transcript, TranscriptError> {
        let video_id = VideoId::new(params.video_id)?;

        self.logger
            .info(&format!("Fetching transcript for video: {}", video_id));

        let transcript = self.fetcher.fetch(&video_id).await?;

        self.logger.info(&format!(
            "Fetched transcript for {} ({} chars)",
            transcript.video_id,
            transcript.text.len()
        ));

        Ok(transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mockall::mock;

    mock! {
        pub TranscriptFetcher {}

        #[async_trait]
        impl TranscriptFetchService for TranscriptFetcher {
            async fn fetch(&self, video_id: &VideoId) -> Result<Transcript, TranscriptError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn sample_transcript() -> Transcript {
        Transcript {
            video_id: VideoId::new("dQw4w9WgXcQ").unwrap(),
            text: "never gonna give you up".to_string(),
            fetched_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn should_fetch_transcript_for_valid_id() {
        let mut fetcher = MockTranscriptFetcher::new();
        fetcher
            .expect_fetch()
            .withf(|video_id| video_id.as_str() == "dQw4w9WgXcQ")
            .returning(|_| Ok(sample_transcript()));

        let use_case = GetTranscriptUseCaseImpl {
            fetcher: Arc::new(fetcher),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetTranscriptParams {
                video_id: "dQw4w9WgXcQ".to_string(),
            })
            .await;

        assert_eq!(result.unwrap().text, "never gonna give you up");
    }

    #[tokio::test]
    async fn should_reject_invalid_video_id_without_fetching() {
        let fetcher = MockTranscriptFetcher::new();

        let use_case = GetTranscriptUseCaseImpl {
            fetcher: Arc::new(fetcher),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetTranscriptParams {
                video_id: "not a video id".to_string(),
            })
            .await;

        assert!(matches!(result, Err(TranscriptError::InvalidVideoId)));
    }

    #[tokio::test]
    async fn should_propagate_fetch_failure() {
        let mut fetcher = MockTranscriptFetcher::new();
        fetcher
            .expect_fetch()
            .returning(|_| Err(TranscriptError::NotAvailable));

        let use_case = GetTranscriptUseCaseImpl {
            fetcher: Arc::new(fetcher),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetTranscriptParams {
                video_id: "dQw4w9WgXcQ".to_string(),
            })
            .await;

        assert!(matches!(result, Err(TranscriptError::NotAvailable)));
    }
}
