use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use business::domain::transcript::errors::TranscriptError;
use business::domain::transcript::model::{Transcript, create_transcript};
use business::domain::transcript::services::TranscriptFetchService;
use business::domain::transcript::value_objects::VideoId;

use crate::client::YouTubeClient;

/// Caption track entry from the player response embedded in the watch page.
#[derive(Debug, Clone, Deserialize)]
struct CaptionTrack {
    #[serde(rename = "baseUrl")]
    base_url: String,
    #[serde(rename = "languageCode")]
    language_code: Option<String>,
}

/// Caption payload in the `json3` timedtext format.
#[derive(Debug, Deserialize)]
struct CaptionEvents {
    #[serde(default)]
    events: Vec<CaptionEvent>,
}

#[derive(Debug, Deserialize)]
struct CaptionEvent {
    #[serde(default)]
    segs: Vec<CaptionSegment>,
}

#[derive(Debug, Deserialize)]
struct CaptionSegment {
    #[serde(default)]
    utf8: String,
}

pub struct TranscriptFetcherYouTube {
    client: YouTubeClient,
}

impl TranscriptFetcherYouTube {
    pub fn new(client: YouTubeClient) -> Self {
        Self { client }
    }

    /// Locates the caption track list inside the watch page HTML.
    ///
    /// The player response is embedded as inline JSON; the track array is
    /// parsed in place, ignoring whatever follows it.
    fn extract_caption_tracks(page: &str) -> Result<Vec<CaptionTrack>, TranscriptError> {
        let marker = "\"captionTracks\":";
        let start = page.find(marker).ok_or(TranscriptError::NotAvailable)? + marker.len();

        let mut deserializer = serde_json::Deserializer::from_str(&page[start..]);
        let tracks = Vec::<CaptionTrack>::deserialize(&mut deserializer)
            .map_err(|_| TranscriptError::NotAvailable)?;

        if tracks.is_empty() {
            return Err(TranscriptError::NotAvailable);
        }

        Ok(tracks)
    }

    /// Picks the track to transcribe: English when available, else the first.
    fn pick_track(tracks: &[CaptionTrack]) -> &CaptionTrack {
        tracks
            .iter()
            .find(|track| {
                track
                    .language_code
                    .as_deref()
                    .is_some_and(|code| code.starts_with("en"))
            })
            .unwrap_or(&tracks[0])
    }

    /// Requests the caption payload in json3 format.
    fn caption_url(track: &CaptionTrack) -> Result<Url, TranscriptError> {
        let mut url = Url::parse(&track.base_url).map_err(|_| TranscriptError::FetchFailed)?;
        url.query_pairs_mut().append_pair("fmt", "json3");
        Ok(url)
    }

    /// Joins caption segments into a single plain-text transcript, the same
    /// shape the chat prompt expects.
    fn join_segments(payload: &CaptionEvents) -> String {
        payload
            .events
            .iter()
            .map(|event| {
                event
                    .segs
                    .iter()
                    .map(|seg| seg.utf8.as_str())
                    .collect::<String>()
            })
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[async_trait]
impl TranscriptFetchService for TranscriptFetcherYouTube {
    async fn fetch(&self, video_id: &VideoId) -> Result<Transcript, TranscriptError> {
        let page = self
            .client
            .client
            .get(self.client.watch_url(video_id.as_str()))
            .send()
            .await
            .map_err(|_| TranscriptError::FetchFailed)?
            .error_for_status()
            .map_err(|_| TranscriptError::FetchFailed)?
            .text()
            .await
            .map_err(|_| TranscriptError::FetchFailed)?;

        let tracks = Self::extract_caption_tracks(&page)?;
        let track = Self::pick_track(&tracks);

        let payload: CaptionEvents = self
            .client
            .client
            .get(Self::caption_url(track)?)
            .send()
            .await
            .map_err(|_| TranscriptError::FetchFailed)?
            .error_for_status()
            .map_err(|_| TranscriptError::FetchFailed)?
            .json()
            .await
            .map_err(|_| TranscriptError::FetchFailed)?;

        create_transcript(video_id.clone(), Self::join_segments(&payload))
    }
}
