pub mod config;
pub mod innertube;
pub mod normalize;
pub mod provider;
pub mod server;
pub mod service;

use serde::Serialize;
use url::Url;

/// One transcript request, as handed to the service layer
#[derive(Debug, Clone)]
pub struct TranscriptRequest {
    pub raw_input: String,
    pub preferred_language: Option<String>,
}

/// Flattened transcript for a single video
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptResult {
    pub video_id: String,
    pub language: Option<String>,
    pub lines: Vec<String>,
    pub text: String,
}

/// Extract an 11-character video ID from a bare ID or any supported URL shape
pub fn extract_video_id(input: &str) -> Option<String> {
    let input = input.trim();
    let token = regex::Regex::new(r"^[a-zA-Z0-9_-]{11}$").unwrap();

    // Bare 11-character video ID
    if token.is_match(input) {
        return Some(input.to_string());
    }

    let url = Url::parse(input).ok()?;

    // youtu.be/ID
    if url.host_str().is_some_and(|h| h.contains("youtu.be")) {
        let first_segment = url
            .path_segments()
            .and_then(|mut segments| segments.find(|s| !s.is_empty()));
        if let Some(segment) = first_segment {
            if token.is_match(segment) {
                return Some(segment.to_string());
            }
        }
    }

    // youtube.com/watch?v=ID
    if let Some((_, v)) = url.query_pairs().find(|(key, _)| key == "v") {
        if token.is_match(&v) {
            return Some(v.to_string());
        }
    }

    // youtube.com/{shorts,embed,v}/ID
    if let Some(caps) = regex::Regex::new(r"/(?:shorts|embed|v)/([a-zA-Z0-9_-]{11})")
        .unwrap()
        .captures(url.path())
    {
        return Some(caps[1].to_string());
    }

    None
}
