//! Prompt templates for the briefing flow

use crate::briefing::request::BriefingRequest;
use crate::util::{collapse_whitespace, truncate_chars};

/// Maximum number of briefing characters quoted in the image prompt
pub const IMAGE_PROMPT_BUDGET: usize = 250;

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// Instruction for the text model
    pub fn briefing(request: &BriefingRequest) -> String {
        match request {
            BriefingRequest::Query(query) => Self::deep_dive(query),
            BriefingRequest::Topics(topics) => Self::survey(topics),
        }
    }

    /// Single-topic instruction for a free-text query
    pub fn deep_dive(query: &str) -> String {
        format!(
            r#"Generate a detailed and engaging sports news briefing for the topic: "{}". Structure your response clearly using Markdown. You MUST use headings (##), subheadings (###), and bullet points (*) to organize the information. Do not just use bold text for headings. Make it look like a professional sports report with clear sections."#,
            query
        )
    }

    /// Multi-topic instruction for a set of selected sports
    pub fn survey(topics: &[String]) -> String {
        format!(
            r#"Generate an exciting, up-to-date sports news briefing for these sports: {}. Structure your response clearly using Markdown. You MUST use a main heading '##' for each sport. Under each sport, use subheadings '###' for different news items and bullet points '*' for details. Do not use bold text as a substitute for headings. Ensure the output is well-structured and easy to read, like a professional sports article."#,
            topics.join(", ")
        )
    }

    /// Bounded excerpt of the briefing used to seed the image prompt
    pub fn image_excerpt(briefing_text: &str) -> String {
        let collapsed = collapse_whitespace(briefing_text);
        truncate_chars(&collapsed, IMAGE_PROMPT_BUDGET).to_string()
    }

    /// Prompt for the image service: excerpt plus a fixed style directive
    pub fn image_prompt(briefing_text: &str) -> String {
        format!(
            r#"Epic, cinematic, vibrant, dynamic digital painting representing the following sports news: "{}...". Abstract and energetic style, capturing the motion and emotion of sports. A masterpiece, hyper-detailed, trending on ArtStation. No text or words in the image. Focus on dynamic shapes, dramatic lighting, and evocative team colors."#,
            Self::image_excerpt(briefing_text)
        )
    }
}
