use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// Longest barcode accepted; keeps every rank inside 16 bits.
pub const MAX_BARCODE_LEN: usize = 15;

/// A validated, lowercase barcode of 1..=15 `i`/`l` symbols.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Barcode(String);

impl Barcode {
    /// Callers must have checked the grammar already; see [`crate::core::barcode::parse`].
    pub(crate) fn from_normalized(symbols: String) -> Self {
        debug_assert!(!symbols.is_empty() && symbols.len() <= MAX_BARCODE_LEN);
        debug_assert!(symbols.bytes().all(|b| b == b'i' || b == b'l'));
        Self(symbols)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Symbols as bits, most significant first (`l` = 1, `i` = 0).
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.bytes().map(|b| b == b'l')
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Barcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Barcode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Dense integer encoding of a barcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Rank(u16);

impl Rank {
    pub const fn new(value: u16) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u16 {
        self.0
    }

    /// Index into the adjective list.
    pub const fn high_byte(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Index into the noun list.
    pub const fn low_byte(self) -> u8 {
        (self.0 & 0xff) as u8
    }
}

impl From<u16> for Rank {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fixed, ordered table of exactly 256 words, indexable by any byte.
#[derive(Debug)]
pub struct WordList([&'static str; 256]);

impl WordList {
    pub const fn new(words: [&'static str; 256]) -> Self {
        Self(words)
    }

    pub fn get(&self, index: u8) -> &'static str {
        self.0[usize::from(index)]
    }

    pub fn words(&self) -> &[&'static str; 256] {
        &self.0
    }
}

/// Outcome of converting one barcode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionResult {
    pub barcode_name: String,
    pub given_name: String,
    pub integer_value: Rank,
}

/// Batch outcome keyed by the caller's original input strings, in input order.
///
/// Serializes as a JSON object rather than a list so the wire shape matches a
/// plain `{input: result}` mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchConversion {
    entries: Vec<(String, ConversionResult)>,
}

impl BatchConversion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repeated inputs keep their first position; the later result replaces the earlier one.
    pub fn insert(&mut self, input: String, result: ConversionResult) {
        match self.entries.iter_mut().find(|(key, _)| *key == input) {
            Some((_, existing)) => *existing = result,
            None => self.entries.push((input, result)),
        }
    }

    pub fn get(&self, input: &str) -> Option<&ConversionResult> {
        self.entries
            .iter()
            .find(|(key, _)| key == input)
            .map(|(_, result)| result)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConversionResult)> {
        self.entries.iter().map(|(key, result)| (key.as_str(), result))
    }
}

impl Serialize for BatchConversion {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (input, result) in &self.entries {
            map.serialize_entry(input, result)?;
        }
        map.end()
    }
}
