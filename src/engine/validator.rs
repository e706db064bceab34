use crate::engine::tokenizer::is_separator;
use crate::ConvertError;
use serde_json::Value;

/// Guard an input string before tokenization. Pure predicate, no side effects.
///
/// Fails with [`ConvertError::EmptyInput`] on a zero-length string (checked
/// before trimming) and with [`ConvertError::SeparatorsOnly`] when nothing but
/// whitespace, underscores and hyphens remains after trimming.
pub fn validate(input: &str) -> Result<&str, ConvertError> {
    if input.is_empty() {
        return Err(ConvertError::EmptyInput);
    }

    if input.trim().chars().all(is_separator) {
        return Err(ConvertError::SeparatorsOnly);
    }

    Ok(input)
}

/// Guard a dynamically typed input. Non-string JSON values fail with
/// [`ConvertError::TypeMismatch`]; string values go through [`validate`].
pub fn validate_value(value: &Value) -> Result<&str, ConvertError> {
    match value {
        Value::String(s) => validate(s),
        other => Err(ConvertError::TypeMismatch {
            actual: describe(other).to_string(),
        }),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
