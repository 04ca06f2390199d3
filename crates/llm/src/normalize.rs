//! Merge heterogeneous sources into one bounded text blob

use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use crate::postprocess::take_chars;
use crate::types::{Source, SourceKind};

/// Character budget for slide generation content
pub const SLIDE_CONTENT_BUDGET: usize = 4000;

/// Character budget for title and summary content
pub const TEXT_CONTENT_BUDGET: usize = 2000;

/// Turns one source into the text it contributes to the prompt
pub trait SourceExtractor: Send + Sync {
    fn extract(&self, source: &Source) -> String;
}

/// Contributes the source value verbatim
#[derive(Debug, Default, Clone, Copy)]
pub struct TextExtractor;

impl SourceExtractor for TextExtractor {
    fn extract(&self, source: &Source) -> String {
        source.value.clone()
    }
}

/// Stands in for real extraction: names the source type and raw reference
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderExtractor;

impl SourceExtractor for PlaceholderExtractor {
    fn extract(&self, source: &Source) -> String {
        format!("{}: {}", source.kind, source.value)
    }
}

/// Normalized content ready for prompting
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedContent {
    /// All source contributions, in input order, cut to the budget
    pub combined: String,

    /// `"Source i: <type> content"` per source, for prompt context
    pub descriptors: Vec<String>,
}

/// Combines sources using one extractor per source kind
#[derive(Clone)]
pub struct ContentNormalizer {
    extractors: HashMap<SourceKind, Arc<dyn SourceExtractor>>,
}

impl Default for ContentNormalizer {
    fn default() -> Self {
        let mut extractors: HashMap<SourceKind, Arc<dyn SourceExtractor>> = HashMap::new();
        for kind in SourceKind::ALL {
            let extractor: Arc<dyn SourceExtractor> = match kind {
                SourceKind::Text => Arc::new(TextExtractor),
                SourceKind::Url | SourceKind::Youtube | SourceKind::Pdf => {
                    Arc::new(PlaceholderExtractor)
                }
            };
            extractors.insert(kind, extractor);
        }
        Self { extractors }
    }
}

impl ContentNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the extractor used for `kind`
    pub fn with_extractor(mut self, kind: SourceKind, extractor: Arc<dyn SourceExtractor>) -> Self {
        self.extractors.insert(kind, extractor);
        self
    }

    fn extract(&self, source: &Source) -> String {
        match self.extractors.get(&source.kind) {
            Some(extractor) => extractor.extract(source),
            None => PlaceholderExtractor.extract(source),
        }
    }

    /// Combine `sources` in order and cut the result to `budget` characters
    ///
    /// The cut applies to the whole concatenation, so a late source may be
    /// partially or entirely dropped.
    pub fn normalize(&self, sources: &[Source], budget: usize) -> NormalizedContent {
        let mut sections = Vec::with_capacity(sources.len());
        let mut descriptors = Vec::with_capacity(sources.len());

        for (index, source) in sources.iter().enumerate() {
            sections.push(format!("Source {}: {}", index, self.extract(source)));
            descriptors.push(format!("Source {}: {} content", index, source.kind));
        }

        let joined = sections.join("\n\n");
        let combined = take_chars(&joined, budget).to_string();

        debug!(
            "Normalized {} sources - {} chars (budget {})",
            sources.len(),
            combined.chars().count(),
            budget
        );

        NormalizedContent {
            combined,
            descriptors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_and_placeholder_sources() {
        let sources = vec![
            Source::text("Hello"),
            Source::new(SourceKind::Url, "http://x"),
        ];
        let normalized = ContentNormalizer::new().normalize(&sources, SLIDE_CONTENT_BUDGET);

        let first = normalized.combined.find("Source 0: Hello").unwrap();
        let second = normalized.combined.find("Source 1: url: http://x").unwrap();
        assert!(first < second);
        assert_eq!(
            normalized.descriptors,
            vec!["Source 0: text content".to_string(), "Source 1: url content".to_string()]
        );
    }

    #[test]
    fn test_youtube_and_pdf_are_not_fetched() {
        let sources = vec![
            Source::new(SourceKind::Youtube, "https://youtu.be/abc"),
            Source::new(SourceKind::Pdf, "report.pdf"),
        ];
        let normalized = ContentNormalizer::new().normalize(&sources, SLIDE_CONTENT_BUDGET);
        assert!(normalized.combined.contains("Source 0: youtube: https://youtu.be/abc"));
        assert!(normalized.combined.contains("Source 1: pdf: report.pdf"));
    }

    #[test]
    fn test_empty_sources() {
        let normalized = ContentNormalizer::new().normalize(&[], SLIDE_CONTENT_BUDGET);
        assert_eq!(normalized, NormalizedContent::default());
    }

    #[test]
    fn test_budget_cuts_later_source() {
        let sources = vec![Source::text("a".repeat(30)), Source::text("tail")];
        let normalized = ContentNormalizer::new().normalize(&sources, 20);
        assert_eq!(normalized.combined.chars().count(), 20);
        assert!(!normalized.combined.contains("tail"));
        assert_eq!(normalized.descriptors.len(), 2);
    }

    #[test]
    fn test_custom_extractor() {
        struct Upper;
        impl SourceExtractor for Upper {
            fn extract(&self, source: &Source) -> String {
                source.value.to_uppercase()
            }
        }

        let normalizer = ContentNormalizer::new().with_extractor(SourceKind::Url, Arc::new(Upper));
        let normalized =
            normalizer.normalize(&[Source::new(SourceKind::Url, "http://x")], SLIDE_CONTENT_BUDGET);
        assert_eq!(normalized.combined, "Source 0: HTTP://X");
    }
}
