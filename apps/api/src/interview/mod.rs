// Question generation: résumé intake, tier classification, prompt assembly
// and extraction of the model's questions.
// All model calls go through llm_client; no direct HTTP calls here.

pub mod classifier;
pub mod handlers;
pub mod prompt_builder;
pub mod prompts;
pub mod questions;
pub mod resume;
pub mod sanitizer;
pub mod session;
pub mod validation;
