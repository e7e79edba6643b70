use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::ChatError;

/// Author of a chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Role {
    User,
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "assistant" => Ok(Role::Assistant),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// An assistant reply produced for a chat message.
#[derive(Debug, Clone)]
pub struct Reply {
    pub id: String,
    pub role: Role,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Creates a new assistant Reply with validation.
pub fn create_reply(id: String, content: String) -> Result<Reply, ChatError> {
    if content.trim().is_empty() {
        return Err(ChatError::EmptyReply);
    }

    Ok(Reply {
        id,
        role: Role::Assistant,
        content: content.trim().to_string(),
        created_at: Utc::now(),
    })
}
