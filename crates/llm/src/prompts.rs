//! Prompt templates for slide, title and summary generation

use std::collections::BTreeMap;

use crate::normalize::TEXT_CONTENT_BUDGET;
use crate::postprocess::take_chars;

/// JSON shape the model must answer with for slide generation
const SLIDE_SCHEMA: &str = r#"{
    "slides": [
        {
            "title": "Slide Title",
            "content": ["Point 1", "Point 2", "Point 3"],
            "image": "image description or null",
            "table": {"headers": ["Col1", "Col2"], "rows": [["data1", "data2"]]} or null
        }
    ],
    "source_usage": {"source_0": 60, "source_1": 40}
}"#;

/// Everything the slide prompt is built from
#[derive(Debug, Clone)]
pub struct SlidePromptInput<'a> {
    pub slide_count: u32,
    pub template: &'a str,
    pub language: &'a str,
    /// Combined content blob, already cut to budget
    pub content: &'a str,
    pub descriptors: &'a [String],
    pub weights: Option<&'a BTreeMap<String, f64>>,
    pub presentation_goal: Option<&'a str>,
}

/// Prompt for slide generation
pub fn slides_prompt(input: &SlidePromptInput<'_>) -> String {
    let mut prompt = format!(
        "Create {} presentation slides in {} from the following content.\n\
         Use the \"{}\" slide template style.\n",
        input.slide_count, input.language, input.template
    );

    if let Some(goal) = input.presentation_goal.filter(|g| !g.trim().is_empty()) {
        prompt.push_str(&format!("Presentation goal: {}\n", goal.trim()));
    }

    prompt.push_str(
        "Each slide should have:\n\
         - Title\n\
         - Key points (3-5 bullet points)\n\
         - Optional: Image description or table data\n",
    );

    if !input.descriptors.is_empty() {
        prompt.push_str("\nSources:\n");
        for descriptor in input.descriptors {
            prompt.push_str(&format!("- {}\n", descriptor));
        }
    }

    if let Some(weights) = input.weights.filter(|w| !w.is_empty()) {
        prompt.push_str("\nGive each source roughly this much emphasis:\n");
        for (source, weight) in weights {
            prompt.push_str(&format!("- {}: {}\n", source, weight));
        }
    }

    prompt.push_str(&format!(
        "\nContent:\n{}\n\n\
         Format as JSON with structure:\n{}\n\n\
         In \"source_usage\", report for every source index (source_0, source_1, ...) \
         the percentage (0-100) of the slide content drawn from it.\n\
         Return only valid JSON, no additional text.",
        input.content, SLIDE_SCHEMA
    ));

    prompt
}

/// Prompt for a short topic title of at most `max_words` words
pub fn title_prompt(content: &str, max_words: usize) -> String {
    format!(
        "Generate a short, descriptive title for the following content in at most {} words.\n\
         Focus on the main topic.\n\n\
         Content:\n{}\n\n\
         Return only the title text, no quotes or additional formatting.",
        max_words,
        take_chars(content, TEXT_CONTENT_BUDGET)
    )
}

/// Prompt for a summary of at most `max_length` characters
pub fn summary_prompt(content: &str, max_length: usize) -> String {
    format!(
        "Summarize the following text in a brief, concise manner (max {} characters).\n\
         Focus on the main topic and key points.\n\n\
         Text:\n{}\n\n\
         Return only the summary text, no additional formatting.",
        max_length,
        take_chars(content, TEXT_CONTENT_BUDGET)
    )
}
