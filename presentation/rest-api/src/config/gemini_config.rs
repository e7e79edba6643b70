use std::env;

const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Configuration for Gemini API access.
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
}

impl GeminiConfig {
    /// Load Gemini configuration from environment variables
    ///
    /// Environment variables:
    /// - API_KEY: Gemini API credential (required)
    /// - GEMINI_MODEL: Model id for generation (default: "gemini-2.0-flash")
    pub fn from_env() -> Self {
        let api_key =
            env::var("API_KEY").expect("API_KEY is not set in the environment variables");
        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Self { api_key, model }
    }
}
