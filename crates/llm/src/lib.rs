//! AutoSlides LLM Integration
//!
//! Gemini API client, content normalization and slide/title/summary generation

mod client;
mod generator;
mod llm_trait;
mod normalize;
mod postprocess;
mod prompts;
mod types;

pub use client::GeminiClient;
pub use generator::{
    FailureKind, Generated, GenerationFailure, Generator, SlideOptions, DEFAULT_SLIDE_COUNT,
    DEFAULT_SUMMARY_LENGTH,
};
pub use llm_trait::LlmClient;
pub use normalize::{
    ContentNormalizer, NormalizedContent, PlaceholderExtractor, SourceExtractor, TextExtractor,
    SLIDE_CONTENT_BUDGET, TEXT_CONTENT_BUDGET,
};
pub use postprocess::{strip_code_fence, truncate_chars, truncate_words, ELLIPSIS};
pub use prompts::{slides_prompt, summary_prompt, title_prompt, SlidePromptInput};
pub use types::{
    GenerateContentRequest, GenerateContentResponse, Slide, SlideDeck, Source, SourceKind,
    SummaryResult, Table, TitleResult,
};
