use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::generator::FailureKind;

// ---------------------------------------------------------------------------
// Gemini wire format
// ---------------------------------------------------------------------------

/// Gemini `generateContent` request
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Single-turn request carrying one text prompt
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt.into() }],
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Part {
    pub text: String,
}

/// Gemini `generateContent` response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,

    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,

    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CandidatePart {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, all parts joined
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();

        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Reason the prompt was blocked, if any
    pub fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback.as_ref()?.block_reason.as_deref()
    }
}

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// Kind of caller-supplied source material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Text,
    Url,
    Youtube,
    Pdf,
}

impl SourceKind {
    pub const ALL: [SourceKind; 4] = [Self::Text, Self::Url, Self::Youtube, Self::Pdf];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Url => "url",
            Self::Youtube => "youtube",
            Self::Pdf => "pdf",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One unit of input material; identity is its position in the request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    #[serde(rename = "type")]
    pub kind: SourceKind,
    pub value: String,
}

impl Source {
    pub fn new(kind: SourceKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::new(SourceKind::Text, value)
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Table attached to a slide
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// One presentation slide as described by the model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    pub content: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub table: Option<Table>,
}

/// Slide generation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideDeck {
    pub slides: Vec<Slide>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_usage"
    )]
    pub source_usage: Option<BTreeMap<String, f64>>,

    #[serde(default)]
    pub error: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<FailureKind>,
}

impl SlideDeck {
    /// Deck holding the single placeholder slide that reports `message`
    pub fn failed(kind: FailureKind, message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            slides: vec![Slide {
                title: "Error Generating Slides".to_string(),
                content: vec!["Failed to process content".to_string(), message.clone()],
                image: None,
                table: None,
            }],
            source_usage: None,
            error: Some(message),
            error_kind: Some(kind),
        }
    }
}

/// Title generation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleResult {
    pub title: String,
}

/// Summary generation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub summary: String,
}

/// Accept percentages as numbers or as strings such as `"40%"`
///
/// Entries that are neither are dropped. A value that is not an object, or
/// that leaves no usable entry, reads as absent.
fn deserialize_usage<'de, D>(deserializer: D) -> Result<Option<BTreeMap<String, f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    let Some(serde_json::Value::Object(entries)) = raw else {
        return Ok(None);
    };

    let usage: BTreeMap<String, f64> = entries
        .into_iter()
        .filter_map(|(key, value)| parse_percent(&value).map(|percent| (key, percent)))
        .collect();

    if usage.is_empty() {
        Ok(None)
    } else {
        Ok(Some(usage))
    }
}

fn parse_percent(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().trim_end_matches('%').trim().parse().ok(),
        _ => None,
    }
}
