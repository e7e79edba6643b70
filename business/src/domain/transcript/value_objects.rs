use super::errors::TranscriptError;

/// YouTube video identifier: exactly 11 characters from [0-9A-Za-z_-].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

pub const VIDEO_ID_LENGTH: usize = 11;

impl VideoId {
    /// Creates a VideoId after validating the YouTube id format.
    pub fn new(id: impl Into<String>) -> Result<Self, TranscriptError> {
        let id = id.into();
        if id.len() != VIDEO_ID_LENGTH {
            return Err(TranscriptError::InvalidVideoId);
        }
        if !id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(TranscriptError::InvalidVideoId);
        }
        Ok(Self(id))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
