use crate::engine::tokenizer::Token;
use crate::engine::CaseKind;

/// Render a token sequence under the target case convention. Never fails for
/// a non-empty sequence; the only failure path is upstream in the validator.
///
/// Postcondition for every kind: no leading/trailing separator and no doubled
/// separator. Empty tokens cannot come out of the tokenizer, but they are
/// filtered here so the postcondition holds regardless of the caller.
pub fn format(tokens: &[Token], kind: CaseKind) -> String {
    let words: Vec<&str> = tokens
        .iter()
        .map(Token::as_str)
        .filter(|w| !w.is_empty())
        .collect();

    match kind {
        CaseKind::Kebab => join_lowercase(&words, "-"),
        CaseKind::Dot => join_lowercase(&words, "."),
        CaseKind::Snake => join_lowercase(&words, "_"),
        CaseKind::Camel => {
            let mut out = String::new();
            for (i, word) in words.iter().enumerate() {
                if i == 0 {
                    out.push_str(&word.to_ascii_lowercase());
                } else {
                    out.push_str(&capitalize(word));
                }
            }
            out
        }
        CaseKind::Pascal => words.iter().map(|w| capitalize(w)).collect(),
    }
}

fn join_lowercase(words: &[&str], sep: &str) -> String {
    words
        .iter()
        .map(|w| w.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join(sep)
}

/// Uppercase the first character, lowercase the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(&chars.as_str().to_ascii_lowercase());
            out
        }
        None => String::new(),
    }
}
