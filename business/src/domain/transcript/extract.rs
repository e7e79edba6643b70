use once_cell::sync::Lazy;
use regex::Regex;

use super::value_objects::VideoId;

// Matches the id after "v=" (watch URLs) or a path separator (youtu.be, /shorts/).
static VIDEO_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11})").expect("video id pattern is valid"));

/// Extracts a YouTube video id from free text containing a video URL.
///
/// Returns None when the message has no recognizable video link.
pub fn extract_video_id(message: &str) -> Option<VideoId> {
    VIDEO_ID_PATTERN
        .captures(message)
        .and_then(|captures| captures.get(1))
        .and_then(|id| VideoId::new(id.as_str()).ok())
}
