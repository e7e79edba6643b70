use async_trait::async_trait;
use serde_json::json;
use uuid::Uuid;

use business::domain::chat::errors::ChatError;
use business::domain::chat::model::{Reply, create_reply};
use business::domain::chat::services::ReplyGeneratorService;
use business::domain::transcript::model::Transcript;

use crate::client::GeminiClient;

pub struct ReplyGeneratorGemini {
    client: GeminiClient,
}

impl ReplyGeneratorGemini {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }

    /// Prepends the transcript to the user message when a video is being
    /// discussed, so the model answers against the video content.
    fn build_prompt(message: &str, context: Option<&Transcript>) -> String {
        match context {
            Some(transcript) => format!("{}\n\n{}", transcript.text, message),
            None => message.to_string(),
        }
    }

    fn parse_response(data: &serde_json::Value) -> Result<String, ChatError> {
        data["candidates"]
            .as_array()
            .and_then(|candidates| candidates.first())
            .and_then(|candidate| candidate["content"]["parts"].as_array())
            .and_then(|parts| parts.first())
            .and_then(|part| part["text"].as_str())
            .map(|text| text.to_string())
            .ok_or(ChatError::GenerationFailed)
    }
}

#[async_trait]
impl ReplyGeneratorService for ReplyGeneratorGemini {
    async fn generate(
        &self,
        message: &str,
        context: Option<Transcript>,
    ) -> Result<Reply, ChatError> {
        let prompt = Self::build_prompt(message, context.as_ref());

        let body = json!({
            "contents": [{
                "parts": [{"text": prompt}],
            }],
            "generationConfig": {
                "temperature": 0.7,
            },
        });

        let response = self
            .client
            .client
            .post(self.client.generate_content_url())
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|_| ChatError::GenerationFailed)?;

        if !response.status().is_success() {
            return Err(ChatError::GenerationFailed);
        }

        let data: serde_json::Value = response
            .json()
            .await
            .map_err(|_| ChatError::GenerationFailed)?;

        let content = Self::parse_response(&data)?;

        create_reply(format!("gemini-{}", Uuid::new_v4()), content)
    }
}
