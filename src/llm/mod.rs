//! LLM Module - prompt construction and SQL generation

pub mod client;
pub mod generator;
pub mod prompt;

pub use client::{ChatCompletionModel, OpenAiClient};
pub use generator::{GenerationRequest, SqlGenerator};
