pub mod formatter;
pub mod tokenizer;
pub mod validator;

use crate::ConvertError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Target case convention requested of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseKind {
    Kebab,
    Camel,
    Dot,
    Snake,
    Pascal,
}

impl CaseKind {
    pub const ALL: [CaseKind; 5] = [
        CaseKind::Kebab,
        CaseKind::Camel,
        CaseKind::Dot,
        CaseKind::Snake,
        CaseKind::Pascal,
    ];
}

impl FromStr for CaseKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kebab" => Ok(CaseKind::Kebab),
            "camel" => Ok(CaseKind::Camel),
            "dot" => Ok(CaseKind::Dot),
            "snake" => Ok(CaseKind::Snake),
            "pascal" => Ok(CaseKind::Pascal),
            _ => Err(format!("Unknown case kind: {}", s)),
        }
    }
}

impl fmt::Display for CaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseKind::Kebab => write!(f, "kebab"),
            CaseKind::Camel => write!(f, "camel"),
            CaseKind::Dot => write!(f, "dot"),
            CaseKind::Snake => write!(f, "snake"),
            CaseKind::Pascal => write!(f, "pascal"),
        }
    }
}

/// Convert a string to the requested case convention.
///
/// Composes validator, tokenizer and formatter in that order; any validation
/// failure short-circuits and is surfaced unchanged. Stateless and safe to
/// call concurrently.
pub fn convert(input: &str, kind: CaseKind) -> Result<String, ConvertError> {
    let input = validator::validate(input)?;
    let tokens = tokenizer::tokenize(input);
    Ok(formatter::format(&tokens, kind))
}

/// Convert a dynamically typed value; non-string values fail with
/// [`ConvertError::TypeMismatch`].
pub fn convert_value(value: &Value, kind: CaseKind) -> Result<String, ConvertError> {
    let input = validator::validate_value(value)?;
    let tokens = tokenizer::tokenize(input);
    Ok(formatter::format(&tokens, kind))
}

pub fn to_kebab_case(input: &str) -> Result<String, ConvertError> {
    convert(input, CaseKind::Kebab)
}

pub fn to_camel_case(input: &str) -> Result<String, ConvertError> {
    convert(input, CaseKind::Camel)
}

pub fn to_dot_case(input: &str) -> Result<String, ConvertError> {
    convert(input, CaseKind::Dot)
}

pub fn to_snake_case(input: &str) -> Result<String, ConvertError> {
    convert(input, CaseKind::Snake)
}

pub fn to_pascal_case(input: &str) -> Result<String, ConvertError> {
    convert(input, CaseKind::Pascal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SAMPLES: [&str; 8] = [
        "hello_world",
        "camelCaseString",
        "HTTPServerResponse",
        "  hello-world  ",
        "PascalCaseString",
        "v2Api",
        "some-hyphenated-text",
        "single",
    ];

    #[test]
    fn test_reference_conversions() {
        assert_eq!(convert("hello__world", CaseKind::Kebab).unwrap(), "hello-world");
        assert_eq!(
            convert("HTTPServerResponse", CaseKind::Kebab).unwrap(),
            "http-server-response"
        );
        assert_eq!(
            convert("camelCaseString", CaseKind::Dot).unwrap(),
            "camel.case.string"
        );
        assert_eq!(convert("  hello-world  ", CaseKind::Camel).unwrap(), "helloWorld");
    }

    #[test]
    fn test_validation_failures_short_circuit() {
        assert_eq!(convert("", CaseKind::Camel), Err(ConvertError::EmptyInput));
        assert_eq!(convert("___", CaseKind::Dot), Err(ConvertError::SeparatorsOnly));
        assert!(matches!(
            convert_value(&json!(null), CaseKind::Camel),
            Err(ConvertError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_idempotence_under_reconversion() {
        for input in SAMPLES {
            for kind in CaseKind::ALL {
                let once = convert(input, kind).unwrap();
                let twice = convert(&once, kind).unwrap();
                assert_eq!(once, twice, "{:?} not idempotent for {:?}", kind, input);
            }
        }
    }

    #[test]
    fn test_round_trip_token_stability() {
        for input in SAMPLES {
            let reference: Vec<String> = tokenizer::tokenize(input)
                .iter()
                .map(|t| t.as_str().to_ascii_lowercase())
                .collect();

            for kind in CaseKind::ALL {
                let rendered = convert(input, kind).unwrap();
                let reparsed: Vec<String> = tokenizer::tokenize(&rendered)
                    .iter()
                    .map(|t| t.as_str().to_ascii_lowercase())
                    .collect();
                assert_eq!(
                    reparsed, reference,
                    "tokens drifted through {:?} for {:?}",
                    kind, input
                );
            }
        }
    }

    #[test]
    fn test_no_separator_leakage_in_camel() {
        for input in SAMPLES {
            let out = convert(input, CaseKind::Camel).unwrap();
            assert!(
                !out.contains([' ', '_', '-', '.']),
                "separator leaked into {:?}",
                out
            );
        }
    }

    #[test]
    fn test_convenience_wrappers() {
        assert_eq!(to_kebab_case("helloWorld").unwrap(), "hello-world");
        assert_eq!(to_camel_case("hello_world").unwrap(), "helloWorld");
        assert_eq!(to_dot_case("HelloWorld").unwrap(), "hello.world");
        assert_eq!(to_snake_case("helloWorld").unwrap(), "hello_world");
        assert_eq!(to_pascal_case("hello-world").unwrap(), "HelloWorld");
    }

    #[test]
    fn test_case_kind_round_trips_through_str() {
        for kind in CaseKind::ALL {
            assert_eq!(kind.to_string().parse::<CaseKind>(), Ok(kind));
        }
        assert!("banana".parse::<CaseKind>().is_err());
    }
}
