use autoslides_common::{AutoSlidesError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::llm_trait::LlmClient;
use crate::normalize::{ContentNormalizer, SLIDE_CONTENT_BUDGET};
use crate::postprocess::{strip_code_fence, truncate_chars, truncate_words};
use crate::prompts::{slides_prompt, summary_prompt, title_prompt, SlidePromptInput};
use crate::types::{SlideDeck, Source, SummaryResult, TitleResult};

pub const DEFAULT_SLIDE_COUNT: u32 = 5;
pub const DEFAULT_SUMMARY_LENGTH: usize = 50;
const DEFAULT_TITLE_WORD_LIMIT: usize = 5;

/// Why a generation fell back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureKind {
    /// Model API unreachable or answered with a non-success status
    Network,
    /// Model API answered but carried no usable text
    InvalidResponse,
    /// Model text was not the JSON shape we asked for
    ParseError,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::InvalidResponse => "invalid-response",
            Self::ParseError => "parse-error",
        }
    }
}

impl From<&AutoSlidesError> for FailureKind {
    fn from(err: &AutoSlidesError) -> Self {
        match err {
            AutoSlidesError::Network(_) => Self::Network,
            AutoSlidesError::Parse(_) | AutoSlidesError::Json(_) => Self::ParseError,
            _ => Self::InvalidResponse,
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reason code plus the message of the error that caused a fallback
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl From<AutoSlidesError> for GenerationFailure {
    fn from(err: AutoSlidesError) -> Self {
        Self {
            kind: FailureKind::from(&err),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for GenerationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.kind)
    }
}

/// Outcome of a generation operation
///
/// Both variants carry a usable result; `Fallback` also says why the model
/// output could not be used.
#[derive(Debug, Clone, PartialEq)]
pub enum Generated<T> {
    Success(T),
    Fallback { result: T, failure: GenerationFailure },
}

impl<T> Generated<T> {
    pub fn result(&self) -> &T {
        match self {
            Self::Success(result) | Self::Fallback { result, .. } => result,
        }
    }

    pub fn into_result(self) -> T {
        match self {
            Self::Success(result) | Self::Fallback { result, .. } => result,
        }
    }

    pub fn failure(&self) -> Option<&GenerationFailure> {
        match self {
            Self::Success(_) => None,
            Self::Fallback { failure, .. } => Some(failure),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}

/// Slide generation parameters
#[derive(Debug, Clone, PartialEq)]
pub struct SlideOptions {
    pub slide_count: u32,
    pub template: String,
    pub language: String,
    pub weights: Option<BTreeMap<String, f64>>,
    pub presentation_goal: Option<String>,
}

impl Default for SlideOptions {
    fn default() -> Self {
        Self {
            slide_count: DEFAULT_SLIDE_COUNT,
            template: "default".to_string(),
            language: "english".to_string(),
            weights: None,
            presentation_goal: None,
        }
    }
}

/// Builds prompts, calls the model once per operation and shapes the reply
pub struct Generator {
    client: Arc<dyn LlmClient>,
    normalizer: ContentNormalizer,
    title_word_limit: usize,
}

impl Generator {
    /// Create new generator
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self {
            client,
            normalizer: ContentNormalizer::new(),
            title_word_limit: DEFAULT_TITLE_WORD_LIMIT,
        }
    }

    pub fn with_normalizer(mut self, normalizer: ContentNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Zero is treated as one word
    pub fn with_title_word_limit(mut self, limit: usize) -> Self {
        self.title_word_limit = limit.max(1);
        self
    }

    pub fn provider(&self) -> &str {
        self.client.provider()
    }

    /// Generate a slide deck from `sources`
    pub async fn generate_slides(&self, sources: &[Source], options: &SlideOptions) -> Generated<SlideDeck> {
        info!(
            "Generating {} slides from {} sources (template: {}, language: {})",
            options.slide_count,
            sources.len(),
            options.template,
            options.language
        );

        let normalized = self.normalizer.normalize(sources, SLIDE_CONTENT_BUDGET);
        let prompt = slides_prompt(&SlidePromptInput {
            slide_count: options.slide_count,
            template: &options.template,
            language: &options.language,
            content: &normalized.combined,
            descriptors: &normalized.descriptors,
            weights: options.weights.as_ref(),
            presentation_goal: options.presentation_goal.as_deref(),
        });

        match self.request_deck(&prompt, sources.len()).await {
            Ok(deck) => {
                debug!("Model returned {} slides", deck.slides.len());
                Generated::Success(deck)
            }
            Err(e) => {
                let failure = GenerationFailure::from(e);
                warn!("Slide generation failed: {}", failure);
                Generated::Fallback {
                    result: SlideDeck::failed(failure.kind, failure.message.clone()),
                    failure,
                }
            }
        }
    }

    async fn request_deck(&self, prompt: &str, source_count: usize) -> Result<SlideDeck> {
        let reply = self.client.generate(prompt).await?;
        parse_deck(&reply, source_count)
    }

    /// Generate a topic title of at most `title_word_limit` words
    pub async fn generate_title(&self, content: &str) -> Generated<TitleResult> {
        let limit = self.title_word_limit;
        let prompt = title_prompt(content, limit);

        match self.client.generate(&prompt).await {
            Ok(reply) => Generated::Success(TitleResult {
                title: truncate_words(reply.trim(), limit),
            }),
            Err(e) => {
                let failure = GenerationFailure::from(e);
                warn!("Title generation failed, using content words: {}", failure);
                Generated::Fallback {
                    result: TitleResult {
                        title: truncate_words(content, limit),
                    },
                    failure,
                }
            }
        }
    }

    /// Generate a summary of at most `max_length` characters
    pub async fn generate_summary(&self, content: &str, max_length: usize) -> Generated<SummaryResult> {
        let prompt = summary_prompt(content, max_length);

        match self.client.generate(&prompt).await {
            Ok(reply) => Generated::Success(SummaryResult {
                summary: truncate_chars(reply.trim(), max_length),
            }),
            Err(e) => {
                let failure = GenerationFailure::from(e);
                warn!("Summary generation failed, truncating content: {}", failure);
                Generated::Fallback {
                    result: SummaryResult {
                        summary: truncate_chars(content, max_length),
                    },
                    failure,
                }
            }
        }
    }
}

/// Parse the model reply into a deck, filling in `source_usage` when absent
fn parse_deck(reply: &str, source_count: usize) -> Result<SlideDeck> {
    let body = strip_code_fence(reply);

    let mut deck: SlideDeck = serde_json::from_str(body)
        .map_err(|e| AutoSlidesError::parse(format!("Invalid slide JSON: {}", e)))?;

    deck.error = None;
    deck.error_kind = None;
    if deck.source_usage.is_none() {
        deck.source_usage = Some(even_usage(source_count));
    }

    Ok(deck)
}

/// 100% split evenly over `source_count` sources
fn even_usage(source_count: usize) -> BTreeMap<String, f64> {
    if source_count == 0 {
        return BTreeMap::new();
    }

    let share = 100.0 / source_count as f64;
    (0..source_count)
        .map(|i| (format!("source_{}", i), share))
        .collect()
}
