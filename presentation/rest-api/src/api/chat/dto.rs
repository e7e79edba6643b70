use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::chat::model::{Reply, Role};

#[derive(Debug, Clone, Serialize, Deserialize, Enum)]
pub enum RoleDto {
    #[oai(rename = "user")]
    User,
    #[oai(rename = "assistant")]
    Assistant,
}

impl From<Role> for RoleDto {
    fn from(r: Role) -> Self {
        match r {
            Role::User => RoleDto::User,
            Role::Assistant => RoleDto::Assistant,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct ChatRequest {
    /// User message; may contain a YouTube video link
    pub message: String,
}

#[derive(Debug, Clone, Object)]
pub struct ReplyResponse {
    /// Message author, always "assistant"
    pub role: RoleDto,
    /// Reply text
    pub content: String,
}

#[derive(Debug, Clone, Object)]
pub struct ChatResponse {
    /// Assistant reply to the submitted message
    pub reply: ReplyResponse,
}

impl From<Reply> for ChatResponse {
    fn from(r: Reply) -> Self {
        Self {
            reply: ReplyResponse {
                role: r.role.into(),
                content: r.content,
            },
        }
    }
}
