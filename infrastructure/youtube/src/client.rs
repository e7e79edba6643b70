use reqwest::Client;

// YouTube serves the full player response only to recognizable browsers.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Shared YouTube HTTP client configuration.
pub struct YouTubeClient {
    pub client: Client,
    pub base_url: String,
}

impl YouTubeClient {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: "https://www.youtube.com".to_string(),
        }
    }

    /// Returns the watch page URL for a video id.
    pub fn watch_url(&self, video_id: &str) -> String {
        format!("{}/watch?v={}", self.base_url, video_id)
    }
}

impl Default for YouTubeClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_build_watch_url_from_video_id() {
        let client = YouTubeClient::new();
        assert_eq!(
            client.watch_url("dQw4w9WgXcQ"),
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        );
    }
}
