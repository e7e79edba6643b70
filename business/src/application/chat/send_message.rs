use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::chat::errors::ChatError;
use crate::domain::chat::model::{Reply, create_reply};
use crate::domain::chat::services::ReplyGeneratorService;
use crate::domain::chat::use_cases::send_message::{SendMessageParams, SendMessageUseCase};
use crate::domain::logger::Logger;
use crate::domain::session::repository::SessionRepository;
use crate::domain::transcript::extract::extract_video_id;
use crate::domain::transcript::services::TranscriptFetchService;

const TRANSCRIPT_READY_REPLY: &str =
    "I've retrieved the transcript. What would you like to ask?";

pub struct SendMessageUseCaseImpl {
    pub transcript_fetcher: Arc<dyn TranscriptFetchService>,
    pub session_repository: Arc<dyn SessionRepository>,
    pub reply_generator: Arc<dyn ReplyGeneratorService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SendMessageUseCase for SendMessageUseCaseImpl {
    async fn execute(&self, params: SendMessageParams) -> Result<Reply, ChatError> {
        let message = params.message.trim();
        if message.is_empty() {
            return Err(ChatError::MessageRequired);
        }

        // A message carrying a video link switches the conversation to that
        // video: fetch its transcript and remember it for follow-ups.
        if let Some(video_id) = extract_video_id(message) {
            self.logger
                .info(&format!("Fetching transcript for video: {}", video_id));

            let transcript = self
                .transcript_fetcher
                .fetch(&video_id)
                .await
                .map_err(|_| ChatError::TranscriptUnavailable)?;

            self.session_repository
                .save(&transcript)
                .await
                .map_err(|_| ChatError::TranscriptUnavailable)?;

            return create_reply(
                format!("chat-{}", Uuid::new_v4()),
                TRANSCRIPT_READY_REPLY.to_string(),
            );
        }

        // Follow-up questions are answered against the remembered transcript
        // when one exists; otherwise fall back to a plain chat reply.
        let context = self
            .session_repository
            .current()
            .await
            .map_err(|_| ChatError::GenerationFailed)?;

        let reply = self.reply_generator.generate(message, context).await?;

        self.logger.info(&format!(
            "Generated reply {} ({} chars)",
            reply.id,
            reply.content.len()
        ));

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::transcript::errors::TranscriptError;
    use crate::domain::transcript::model::Transcript;
    use crate::domain::transcript::value_objects::VideoId;
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
        pub SessionRepo {}

        #[async_trait]
        impl SessionRepository for SessionRepo {
            async fn save(&self, transcript: &Transcript) -> Result<(), RepositoryError>;
            async fn current(&self) -> Result<Option<Transcript>, RepositoryError>;
        }
    }

    mock! {
        pub ReplyGenerator {}

        #[async_trait]
        impl ReplyGeneratorService for ReplyGenerator {
            async fn generate(
                &self,
                message: &str,
                context: Option<Transcript>,
            ) -> Result<Reply, ChatError>;
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

    fn sample_reply(content: &str) -> Reply {
        create_reply("gemini-test".to_string(), content.to_string()).unwrap()
    }

    fn use_case(
        fetcher: MockTranscriptFetcher,
        session: MockSessionRepo,
        generator: MockReplyGenerator,
    ) -> SendMessageUseCaseImpl {
        SendMessageUseCaseImpl {
            transcript_fetcher: Arc::new(fetcher),
            session_repository: Arc::new(session),
            reply_generator: Arc::new(generator),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_reject_blank_message() {
        let use_case = use_case(
            MockTranscriptFetcher::new(),
            MockSessionRepo::new(),
            MockReplyGenerator::new(),
        );

        let result = use_case
            .execute(SendMessageParams {
                message: "   ".to_string(),
            })
            .await;

        assert!(matches!(result, Err(ChatError::MessageRequired)));
    }

    #[tokio::test]
    async fn should_fetch_and_store_transcript_when_message_has_video_link() {
        let mut fetcher = MockTranscriptFetcher::new();
        fetcher
            .expect_fetch()
            .withf(|video_id| video_id.as_str() == "dQw4w9WgXcQ")
            .returning(|_| Ok(sample_transcript()));

        let mut session = MockSessionRepo::new();
        session
            .expect_save()
            .withf(|transcript| transcript.video_id.as_str() == "dQw4w9WgXcQ")
            .returning(|_| Ok(()));

        let use_case = use_case(fetcher, session, MockReplyGenerator::new());

        let result = use_case
            .execute(SendMessageParams {
                message: "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
            })
            .await;

        let reply = result.unwrap();
        assert_eq!(reply.content, TRANSCRIPT_READY_REPLY);
    }

    #[tokio::test]
    async fn should_fail_when_transcript_fetch_fails() {
        let mut fetcher = MockTranscriptFetcher::new();
        fetcher
            .expect_fetch()
            .returning(|_| Err(TranscriptError::FetchFailed));

        let use_case = use_case(fetcher, MockSessionRepo::new(), MockReplyGenerator::new());

        let result = use_case
            .execute(SendMessageParams {
                message: "https://youtu.be/dQw4w9WgXcQ".to_string(),
            })
            .await;

        assert!(matches!(result, Err(ChatError::TranscriptUnavailable)));
    }

    #[tokio::test]
    async fn should_answer_follow_up_with_stored_transcript_as_context() {
        let mut session = MockSessionRepo::new();
        session
            .expect_current()
            .returning(|| Ok(Some(sample_transcript())));

        let mut generator = MockReplyGenerator::new();
        generator
            .expect_generate()
            .withf(|message, context| {
                message == "what is the song about?"
                    && context
                        .as_ref()
                        .is_some_and(|t| t.video_id.as_str() == "dQw4w9WgXcQ")
            })
            .returning(|_, _| Ok(sample_reply("It is about commitment.")));

        let use_case = use_case(MockTranscriptFetcher::new(), session, generator);

        let result = use_case
            .execute(SendMessageParams {
                message: "what is the song about?".to_string(),
            })
            .await;

        assert_eq!(result.unwrap().content, "It is about commitment.");
    }

    #[tokio::test]
    async fn should_fall_back_to_plain_chat_when_no_transcript_stored() {
        let mut session = MockSessionRepo::new();
        session.expect_current().returning(|| Ok(None));

        let mut generator = MockReplyGenerator::new();
        generator
            .expect_generate()
            .withf(|message, context| message == "hello" && context.is_none())
            .returning(|_, _| Ok(sample_reply("Hi! Ask me about a video.")));

        let use_case = use_case(MockTranscriptFetcher::new(), session, generator);

        let result = use_case
            .execute(SendMessageParams {
                message: "hello".to_string(),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_fail_when_generation_fails() {
        let mut session = MockSessionRepo::new();
        session.expect_current().returning(|| Ok(None));

        let mut generator = MockReplyGenerator::new();
        generator
            .expect_generate()
            .returning(|_, _| Err(ChatError::GenerationFailed));

        let use_case = use_case(MockTranscriptFetcher::new(), session, generator);

        let result = use_case
            .execute(SendMessageParams {
                message: "hello".to_string(),
            })
            .await;

        assert!(matches!(result, Err(ChatError::GenerationFailed)));
    }

    #[tokio::test]
    async fn should_fail_when_session_save_fails() {
        let mut fetcher = MockTranscriptFetcher::new();
        fetcher.expect_fetch().returning(|_| Ok(sample_transcript()));

        let mut session = MockSessionRepo::new();
        session
            .expect_save()
            .returning(|_| Err(RepositoryError::Persistence));

        let use_case = use_case(fetcher, session, MockReplyGenerator::new());

        let result = use_case
            .execute(SendMessageParams {
                message: "https://youtu.be/dQw4w9WgXcQ".to_string(),
            })
            .await;

        assert!(matches!(result, Err(ChatError::TranscriptUnavailable)));
    }
}
