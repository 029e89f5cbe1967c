use crate::core::words::{ADJECTIVES, NOUNS};
use crate::domain::model::Rank;

/// Uppercases the first character only; interior words of multi-word entries keep their case.
pub fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Adjective picked by the high byte, noun by the low byte, joined without a separator.
pub fn given_name(rank: Rank) -> String {
    let mut name = title_case(ADJECTIVES.get(rank.high_byte()));
    name.push_str(&title_case(NOUNS.get(rank.low_byte())));
    name
}
