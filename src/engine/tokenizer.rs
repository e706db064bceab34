use std::fmt;

/// A single semantic word extracted from the input. The newtype keeps tokens
/// distinct from raw strings; characters are stored as received and casing is
/// decided only when a formatter renders the sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token(String);

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.0 == **other
    }
}

/// Explicit word-boundary characters: space (any whitespace), underscore,
/// hyphen.
pub(crate) fn is_separator(ch: char) -> bool {
    ch == '_' || ch == '-' || ch.is_whitespace()
}

/// Split a validated input string into an ordered sequence of tokens.
///
/// Single pass: trim, partition on explicit separators, then split each
/// segment at camelCase boundaries. Assumes the input already passed
/// [`validator::validate`](crate::engine::validator::validate); called with
/// separator-only input it returns an empty sequence instead of an error.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();

    for segment in input.trim().split(is_separator) {
        if !segment.is_empty() {
            split_camel(segment, &mut tokens);
        }
    }

    tokens
}

/// Split one separator-free segment at implicit camel boundaries.
///
/// Two ordered rules, scanned left to right and non-overlapping:
///   (a) between a lowercase/digit character and a following uppercase one
///       (`helloWorld` -> `hello`, `World`);
///   (b) between the last capital of an uppercase run and an upper-then-lower
///       pair, so acronyms stay together (`HTTPServer` -> `HTTP`, `Server`).
///
/// Digits are ordinary token characters: they can end a word before a capital
/// (`v2Api` -> `v2`, `Api`) but never open a boundary themselves.
fn split_camel(segment: &str, out: &mut Vec<Token>) {
    let chars: Vec<char> = segment.chars().collect();
    let mut start = 0;

    for i in 1..chars.len() {
        let prev = chars[i - 1];
        let cur = chars[i];

        let rule_a = cur.is_ascii_uppercase()
            && (prev.is_ascii_lowercase() || prev.is_ascii_digit());

        let rule_b = cur.is_ascii_uppercase()
            && prev.is_ascii_uppercase()
            && matches!(chars.get(i + 1), Some(next) if next.is_ascii_lowercase());

        if rule_a || rule_b {
            out.push(Token(chars[start..i].iter().collect()));
            start = i;
        }
    }

    out.push(Token(chars[start..].iter().collect()));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_splitting() {
        assert_eq!(tokenize("snake_case_string"), ["snake", "case", "string"]);
        assert_eq!(tokenize("kebab-case"), ["kebab", "case"]);
        assert_eq!(tokenize("hello world"), ["hello", "world"]);
    }

    #[test]
    fn test_consecutive_separators_collapse() {
        assert_eq!(tokenize("hello__world"), ["hello", "world"]);
        assert_eq!(tokenize("hello -_ world"), ["hello", "world"]);
    }

    #[test]
    fn test_camel_boundaries() {
        assert_eq!(tokenize("camelCaseString"), ["camel", "Case", "String"]);
        assert_eq!(tokenize("PascalCase"), ["Pascal", "Case"]);
    }

    #[test]
    fn test_acronym_runs_stay_together() {
        assert_eq!(tokenize("HTTPServer"), ["HTTP", "Server"]);
        assert_eq!(
            tokenize("HTTPServerResponse"),
            ["HTTP", "Server", "Response"]
        );
        assert_eq!(tokenize("XMLHTTPRequest"), ["XMLHTTP", "Request"]);
    }

    #[test]
    fn test_trailing_acronym_is_one_token() {
        assert_eq!(tokenize("parseJSON"), ["parse", "JSON"]);
    }

    #[test]
    fn test_digits_are_ordinary_token_characters() {
        assert_eq!(tokenize("v2Api"), ["v2", "Api"]);
        assert_eq!(tokenize("base64"), ["base64"]);
        assert_eq!(tokenize("sha256_digest"), ["sha256", "digest"]);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(tokenize("  hello-world  "), ["hello", "world"]);
        assert_eq!(tokenize("\thello\n"), ["hello"]);
    }

    #[test]
    fn test_case_is_preserved_in_tokens() {
        let tokens = tokenize("helloWorld");
        assert_eq!(tokens[1].as_str(), "World");
    }

    #[test]
    fn test_separators_only_yields_no_tokens() {
        assert!(tokenize("___").is_empty());
        assert!(tokenize("  - _ ").is_empty());
    }
}
