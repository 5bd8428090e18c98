use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Metadata for a single video, from the player endpoint
#[derive(Debug, Clone)]
pub struct VideoInfo {
    pub video_id: String,
    pub title: String,
}

/// One entry of a transcript's language menu
#[derive(Debug, Clone)]
pub struct LanguageTrack {
    pub name: String,
    /// Opaque request token that reloads the panel in this language
    pub(crate) params: String,
}

/// A fetched transcript panel plus its language menu.
///
/// `content` is the raw panel subtree as returned upstream; flattening it
/// into caption lines is the normalizer's job, not the provider's.
#[derive(Debug, Clone)]
pub struct TranscriptPanel {
    pub content: Value,
    pub selected_language: Option<String>,
    pub tracks: Vec<LanguageTrack>,
}

impl TranscriptPanel {
    pub fn has_language(&self, lang: &str) -> bool {
        self.tracks.iter().any(|track| track.name == lang)
    }
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("no transcript available")]
    Unavailable,
    #[error(transparent)]
    Other(#[from] eyre::Report),
}

/// Source of video metadata and caption transcripts.
///
/// The service holds this behind `Arc<dyn CaptionProvider>` so tests can
/// substitute a canned provider.
#[async_trait]
pub trait CaptionProvider: Send + Sync {
    async fn video_info(&self, video_id: &str) -> Result<VideoInfo, ProviderError>;

    /// Fetch the default-language transcript panel for a video.
    /// Fails with [`ProviderError::Unavailable`] when the video offers none.
    async fn transcript(&self, info: &VideoInfo) -> Result<TranscriptPanel, ProviderError>;

    /// Re-fetch the panel in another language offered by its menu
    async fn select_language(
        &self,
        panel: &TranscriptPanel,
        lang: &str,
    ) -> Result<TranscriptPanel, ProviderError>;
}
