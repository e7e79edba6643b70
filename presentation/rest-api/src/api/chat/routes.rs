use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::chat::use_cases::send_message::{SendMessageParams, SendMessageUseCase};

use crate::api::chat::dto::{ChatRequest, ChatResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct ChatApi {
    send_message_use_case: Arc<dyn SendMessageUseCase>,
}

impl ChatApi {
    pub fn new(send_message_use_case: Arc<dyn SendMessageUseCase>) -> Self {
        Self {
            send_message_use_case,
        }
    }
}

/// Chat API
///
/// Endpoints for chatting with the AI about YouTube videos.
#[OpenApi]
impl ChatApi {
    /// Chat with AI about videos
    ///
    /// Send a message to chat with the AI. A message containing a YouTube URL
    /// switches the conversation to that video: its transcript is fetched and
    /// remembered for follow-up questions. Other messages are answered against
    /// the remembered transcript, or as plain chat when none is stored.
    #[oai(path = "/chat/", method = "post", tag = "ApiTags::Chat")]
    async fn chat(&self, body: Json<ChatRequest>) -> SendMessageResponse {
        let params = SendMessageParams {
            message: body.0.message,
        };

        match self.send_message_use_case.execute(params).await {
            Ok(reply) => SendMessageResponse::Ok(Json(reply.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SendMessageResponse::BadRequest(json),
                    _ => SendMessageResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SendMessageResponse {
    #[oai(status = 200)]
    Ok(Json<ChatResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
