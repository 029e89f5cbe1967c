//! Barcode grammar: an optional `@`, then 1 to 15 symbols from `{i, l}` in any case.

use crate::domain::model::Barcode;
use regex::Regex;
use std::sync::LazyLock;

static BARCODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^@?([il]{1,15})$").expect("barcode pattern is valid"));

/// Extracts the canonical barcode from `input`.
///
/// Returns `None` for absent or empty input and for anything outside the
/// grammar; whether that is an error is the caller's decision.
pub fn parse(input: Option<&str>) -> Option<Barcode> {
    let input = input.filter(|s| !s.is_empty())?;
    let captures = BARCODE_RE.captures(input)?;
    let symbols = captures.get(1)?.as_str().to_ascii_lowercase();
    Some(Barcode::from_normalized(symbols))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(input: &str) -> Option<String> {
        parse(Some(input)).map(Barcode::into_string)
    }

    #[test]
    fn test_accepts_and_normalizes_case() {
        assert_eq!(parsed("I").as_deref(), Some("i"));
        assert_eq!(parsed("Il").as_deref(), Some("il"));
        assert_eq!(parsed("LLiI").as_deref(), Some("llii"));
    }

    #[test]
    fn test_strips_at_prefix() {
        assert_eq!(parsed("@lllliiii").as_deref(), Some("lllliiii"));
    }

    #[test]
    fn test_rejects_absent_and_empty() {
        assert!(parse(None).is_none());
        assert!(parse(Some("")).is_none());
        assert!(parsed("@").is_none());
    }

    #[test]
    fn test_length_limits() {
        assert!(parsed(&"l".repeat(15)).is_some());
        assert!(parsed(&format!("@{}", "i".repeat(15))).is_some());
        assert!(parsed(&"l".repeat(16)).is_none());
    }

    #[test]
    fn test_rejects_foreign_characters() {
        for input in ["bogus", "il1", " il", "il ", "i@l", "@@il", "ll\n", "1l"] {
            assert!(parsed(input).is_none(), "accepted {:?}", input);
        }
    }
}
