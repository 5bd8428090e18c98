use std::sync::Arc;

use log::debug;
use thiserror::Error;

use crate::provider::{CaptionProvider, ProviderError};
use crate::{TranscriptRequest, TranscriptResult, extract_video_id, normalize};

#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("please provide a valid YouTube link or video ID")]
    InvalidInput,
    #[error("transcript not available for this video (disabled or missing)")]
    Unavailable,
    #[error("provider failure: {0}")]
    Provider(eyre::Report),
}

impl From<ProviderError> for TranscriptError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Unavailable => TranscriptError::Unavailable,
            ProviderError::Other(report) => TranscriptError::Provider(report),
        }
    }
}

/// Orchestrates identifier extraction, transcript retrieval and flattening
#[derive(Clone)]
pub struct TranscriptService {
    provider: Arc<dyn CaptionProvider>,
}

impl TranscriptService {
    pub fn new(provider: Arc<dyn CaptionProvider>) -> Self {
        Self { provider }
    }

    pub async fn fetch(&self, request: &TranscriptRequest) -> Result<TranscriptResult, TranscriptError> {
        let video_id = extract_video_id(&request.raw_input).ok_or(TranscriptError::InvalidInput)?;

        let info = self.provider.video_info(&video_id).await?;
        let mut panel = self.provider.transcript(&info).await?;

        if let Some(lang) = request.preferred_language.as_deref() {
            if panel.has_language(lang) {
                match self.provider.select_language(&panel, lang).await {
                    Ok(switched) => panel = switched,
                    // Non-fatal: keep the default-language panel
                    Err(_) => {}
                }
            }
        }

        let lines = normalize::caption_lines(&panel.content);
        let text = lines.join(" ");
        debug!(
            "Transcript {video_id}: {} lines, language={:?}",
            lines.len(),
            panel.selected_language
        );

        Ok(TranscriptResult {
            video_id,
            language: panel.selected_language,
            lines,
            text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use eyre::eyre;
    use serde_json::json;

    use crate::provider::{LanguageTrack, TranscriptPanel, VideoInfo};

    /// Canned provider: a default panel, an optional switched panel, and
    /// switchable failure modes
    struct StubProvider {
        transcript_available: bool,
        switch_fails: bool,
        languages: Vec<&'static str>,
        selected: &'static str,
    }

    impl StubProvider {
        fn with_transcript() -> Self {
            Self {
                transcript_available: true,
                switch_fails: false,
                languages: vec!["English", "Deutsch"],
                selected: "English",
            }
        }

        fn without_transcript() -> Self {
            Self {
                transcript_available: false,
                switch_fails: false,
                languages: vec![],
                selected: "",
            }
        }

        fn panel(&self, selected: &str) -> TranscriptPanel {
            TranscriptPanel {
                content: json!({
                    "body": {
                        "initial_segments": [
                            { "snippet": { "runs": [{ "text": format!("hello in {selected}") }] } },
                            { "text": "second line" }
                        ]
                    }
                }),
                selected_language: Some(selected.to_string()),
                tracks: self
                    .languages
                    .iter()
                    .map(|name| LanguageTrack {
                        name: name.to_string(),
                        params: format!("tok-{name}"),
                    })
                    .collect(),
            }
        }
    }

    #[async_trait]
    impl CaptionProvider for StubProvider {
        async fn video_info(&self, video_id: &str) -> Result<VideoInfo, ProviderError> {
            Ok(VideoInfo {
                video_id: video_id.to_string(),
                title: "Stub Video".to_string(),
            })
        }

        async fn transcript(&self, _info: &VideoInfo) -> Result<TranscriptPanel, ProviderError> {
            if !self.transcript_available {
                return Err(ProviderError::Unavailable);
            }
            Ok(self.panel(self.selected))
        }

        async fn select_language(
            &self,
            _panel: &TranscriptPanel,
            lang: &str,
        ) -> Result<TranscriptPanel, ProviderError> {
            if self.switch_fails {
                return Err(ProviderError::Other(eyre!("switch failed")));
            }
            Ok(self.panel(lang))
        }
    }

    fn service(provider: StubProvider) -> TranscriptService {
        TranscriptService::new(Arc::new(provider))
    }

    fn request(raw: &str, lang: Option<&str>) -> TranscriptRequest {
        TranscriptRequest {
            raw_input: raw.to_string(),
            preferred_language: lang.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let svc = service(StubProvider::with_transcript());
        let result = svc.fetch(&request("dQw4w9WgXcQ", None)).await.unwrap();

        assert_eq!(result.video_id, "dQw4w9WgXcQ");
        assert_eq!(result.language.as_deref(), Some("English"));
        assert_eq!(result.lines, vec!["hello in English", "second line"]);
        assert_eq!(result.text, result.lines.join(" "));
    }

    #[tokio::test]
    async fn test_invalid_input() {
        let svc = service(StubProvider::with_transcript());
        let err = svc.fetch(&request("not a url", None)).await.unwrap_err();
        assert!(matches!(err, TranscriptError::InvalidInput));
    }

    #[tokio::test]
    async fn test_transcript_unavailable() {
        let svc = service(StubProvider::without_transcript());
        let err = svc.fetch(&request("dQw4w9WgXcQ", None)).await.unwrap_err();
        assert!(matches!(err, TranscriptError::Unavailable));
    }

    #[tokio::test]
    async fn test_language_switch_applied() {
        let svc = service(StubProvider::with_transcript());
        let result = svc.fetch(&request("dQw4w9WgXcQ", Some("Deutsch"))).await.unwrap();

        assert_eq!(result.language.as_deref(), Some("Deutsch"));
        assert_eq!(result.lines[0], "hello in Deutsch");
    }

    #[tokio::test]
    async fn test_unknown_language_keeps_default() {
        let svc = service(StubProvider::with_transcript());
        let result = svc.fetch(&request("dQw4w9WgXcQ", Some("Klingon"))).await.unwrap();

        assert_eq!(result.language.as_deref(), Some("English"));
    }

    #[tokio::test]
    async fn test_failed_switch_keeps_default() {
        let mut provider = StubProvider::with_transcript();
        provider.switch_fails = true;

        let svc = service(provider);
        let result = svc.fetch(&request("dQw4w9WgXcQ", Some("Deutsch"))).await.unwrap();

        assert_eq!(result.language.as_deref(), Some("English"));
        assert_eq!(result.lines[0], "hello in English");
    }
}
