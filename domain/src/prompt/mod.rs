//! Prompt construction for the text and image services.

mod template;

pub use template::{IMAGE_PROMPT_BUDGET, PromptTemplate};
