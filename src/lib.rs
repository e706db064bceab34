pub mod cli;
pub mod config;
pub mod engine;

pub use config::Config;
pub use engine::tokenizer::Token;
pub use engine::{
    convert, convert_value, to_camel_case, to_dot_case, to_kebab_case, to_pascal_case,
    to_snake_case, CaseKind,
};

use thiserror::Error;

/// Failure raised at the validation boundary. All three variants are detected
/// synchronously before any tokenization happens; a failed conversion never
/// yields a partial or empty-string result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("input must be a string, got {actual}")]
    TypeMismatch { actual: String },

    #[error("input cannot be an empty string")]
    EmptyInput,

    #[error("input cannot contain only separators")]
    SeparatorsOnly,
}

#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    pub converted: usize,
    pub failed: usize,
    pub entries: Vec<BatchEntry>,
}

#[derive(Debug, Clone)]
pub struct BatchEntry {
    pub input: String,
    pub outcome: Result<String, ConvertError>,
}
