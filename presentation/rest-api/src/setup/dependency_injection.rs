use std::sync::Arc;

use logger::TracingLogger;
use persistence::session::repository::SessionRepositoryInMemory;

use gemini::client::GeminiClient;
use gemini::reply_generator::ReplyGeneratorGemini;
use youtube::client::YouTubeClient;
use youtube::transcript_fetcher::TranscriptFetcherYouTube;

use business::application::chat::send_message::SendMessageUseCaseImpl;
use business::application::transcript::get_transcript::GetTranscriptUseCaseImpl;

use crate::config::gemini_config::GeminiConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub chat_api: crate::api::chat::routes::ChatApi,
    pub transcript_api: crate::api::transcript::routes::TranscriptApi,
}

impl DependencyContainer {
    pub fn new() -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let gemini_config = GeminiConfig::from_env();
        let gemini_client = GeminiClient::new(gemini_config.api_key, gemini_config.model);
        let reply_generator = Arc::new(ReplyGeneratorGemini::new(gemini_client));

        let transcript_fetcher = Arc::new(TranscriptFetcherYouTube::new(YouTubeClient::new()));
        let session_repository = Arc::new(SessionRepositoryInMemory::new());

        // Chat use cases
        let send_message_use_case = Arc::new(SendMessageUseCaseImpl {
            transcript_fetcher: transcript_fetcher.clone(),
            session_repository,
            reply_generator,
            logger: logger.clone(),
        });

        // Transcript use cases
        let get_transcript_use_case = Arc::new(GetTranscriptUseCaseImpl {
            fetcher: transcript_fetcher,
            logger,
        });

        let chat_api = crate::api::chat::routes::ChatApi::new(send_message_use_case);
        let transcript_api =
            crate::api::transcript::routes::TranscriptApi::new(get_transcript_use_case);

        Self {
            health_api,
            chat_api,
            transcript_api,
        }
    }
}
