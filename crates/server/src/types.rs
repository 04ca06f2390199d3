use autoslides_llm::{SlideOptions, Source, DEFAULT_SLIDE_COUNT, DEFAULT_SUMMARY_LENGTH};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `POST /generate-slides` body
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GenerateSlidesRequest {
    /// Ordered source list; index is the source identity
    #[serde(default)]
    pub sources: Option<Vec<Source>>,

    /// Older single-string form, used only when `sources` is absent
    #[serde(default)]
    pub content: Option<String>,

    /// Requested emphasis per source identifier
    #[serde(default)]
    pub weights: Option<BTreeMap<String, f64>>,

    #[serde(default)]
    pub presentation_goal: Option<String>,

    #[serde(default)]
    pub slide_count: Option<u32>,

    #[serde(default)]
    pub template: Option<String>,

    #[serde(default)]
    pub language: Option<String>,
}

impl GenerateSlidesRequest {
    /// Sources to generate from, folding the legacy `content` field in
    pub fn sources(&self) -> Vec<Source> {
        match (&self.sources, &self.content) {
            (Some(sources), _) => sources.clone(),
            (None, Some(content)) => vec![Source::text(content.clone())],
            (None, None) => Vec::new(),
        }
    }

    pub fn options(&self) -> SlideOptions {
        let defaults = SlideOptions::default();
        SlideOptions {
            slide_count: self.slide_count.unwrap_or(DEFAULT_SLIDE_COUNT),
            template: self.template.clone().unwrap_or(defaults.template),
            language: self.language.clone().unwrap_or(defaults.language),
            weights: self.weights.clone(),
            presentation_goal: self.presentation_goal.clone(),
        }
    }
}

/// `POST /generate-title` body
#[derive(Debug, Deserialize, Serialize)]
pub struct GenerateTitleRequest {
    pub content: String,
}

/// `POST /generate-summary` body
#[derive(Debug, Deserialize, Serialize)]
pub struct GenerateSummaryRequest {
    pub content: String,

    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

fn default_max_length() -> usize {
    DEFAULT_SUMMARY_LENGTH
}

/// `GET /` response
#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
}

/// `GET /health` response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_provider: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Error body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoslides_llm::SourceKind;

    #[test]
    fn test_slides_request_defaults() {
        let req: GenerateSlidesRequest = serde_json::from_str(r#"{"sources":[]}"#).unwrap();
        let options = req.options();
        assert_eq!(options.slide_count, 5);
        assert_eq!(options.template, "default");
        assert_eq!(options.language, "english");
        assert!(req.sources().is_empty());
    }

    #[test]
    fn test_slides_request_legacy_content() {
        let req: GenerateSlidesRequest =
            serde_json::from_str(r#"{"content":"Plain text","slide_count":3}"#).unwrap();
        assert_eq!(req.sources(), vec![Source::text("Plain text")]);
        assert_eq!(req.options().slide_count, 3);
    }

    #[test]
    fn test_slides_request_sources_win_over_content() {
        let req: GenerateSlidesRequest = serde_json::from_str(
            r#"{"sources":[{"type":"pdf","value":"a.pdf"}],"content":"ignored"}"#,
        )
        .unwrap();
        assert_eq!(req.sources(), vec![Source::new(SourceKind::Pdf, "a.pdf")]);
    }

    #[test]
    fn test_summary_request_default_length() {
        let req: GenerateSummaryRequest = serde_json::from_str(r#"{"content":"x"}"#).unwrap();
        assert_eq!(req.max_length, 50);
    }
}
