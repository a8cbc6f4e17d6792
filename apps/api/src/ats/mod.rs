// ATS scoring: a fixed-weight rubric over the resume record plus an optional
// LLM narrative. All LLM calls go through llm_client.

pub mod guard;
pub mod handlers;
pub mod keywords;
pub mod narrative;
pub mod prompts;
pub mod report;
pub mod rubric;
pub mod store;
