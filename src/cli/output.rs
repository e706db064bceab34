use crate::engine::CaseKind;
use crate::BatchResult;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonEntry {
    input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonOutput {
    case: String,
    converted: usize,
    failed: usize,
    results: Vec<JsonEntry>,
}

pub fn print_results(
    result: &BatchResult,
    kind: CaseKind,
    colored_output: bool,
    format: &OutputFormat,
) {
    match format {
        OutputFormat::Text => print_text_results(result, colored_output),
        OutputFormat::Json => print_json_results(result, kind),
    }
}

fn print_text_results(result: &BatchResult, colored_output: bool) {
    for entry in &result.entries {
        match &entry.outcome {
            Ok(output) => {
                // Successful conversions go to stdout so they can be piped
                println!("{}", output);
            }
            Err(err) => {
                if colored_output {
                    eprintln!(
                        "{} {}: {}",
                        "error:".red().bold(),
                        format!("{:?}", entry.input).yellow(),
                        err
                    );
                } else {
                    eprintln!("error: {:?}: {}", entry.input, err);
                }
            }
        }
    }
}

fn print_json_results(result: &BatchResult, kind: CaseKind) {
    let entries: Vec<JsonEntry> = result
        .entries
        .iter()
        .map(|e| JsonEntry {
            input: e.input.clone(),
            output: e.outcome.as_ref().ok().cloned(),
            error: e.outcome.as_ref().err().map(|err| err.to_string()),
        })
        .collect();

    let output = JsonOutput {
        case: kind.to_string(),
        converted: result.converted,
        failed: result.failed,
        results: entries,
    };

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

pub fn print_summary(result: &BatchResult, colored: bool) {
    if result.failed == 0 {
        return;
    }

    let noun = if result.failed == 1 { "input" } else { "inputs" };
    if colored {
        eprintln!(
            "{} {} {} could not be converted",
            "✗".red().bold(),
            result.failed.to_string().red().bold(),
            noun
        );
    } else {
        eprintln!("✗ {} {} could not be converted", result.failed, noun);
    }
}

pub fn print_kinds(colored: bool) {
    for kind in CaseKind::ALL {
        let example = crate::convert("example input string", kind).unwrap_or_default();
        if colored {
            println!("  {}  {}", kind.to_string().bold(), example.dimmed());
        } else {
            println!("  {}  {}", kind, example);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parsing() {
        assert!(matches!("text".parse(), Ok(OutputFormat::Text)));
        assert!(matches!("JSON".parse(), Ok(OutputFormat::Json)));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
