//! Raw input rows and permissive field parsing.

use std::collections::HashMap;
use std::str::FromStr;

use serde::Deserialize;

/// One parsed input row: field name to raw string value
///
/// Lookups trim surrounding whitespace and treat blank values as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct RawLightRow(HashMap<String, String>);

impl RawLightRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy for constructing rows in code
    pub fn with(mut self, field: &str, value: &str) -> Self {
        self.0.insert(field.to_string(), value.to_string());
        self
    }

    /// Trimmed, non-blank value of `field`
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .get(field)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// Trimmed value of `field`, or empty when absent
    pub fn text(&self, field: &str) -> String {
        self.get(field).unwrap_or_default().to_string()
    }

    /// Parse `field` as a number, `None` when absent or malformed
    pub fn number<T: FromStr>(&self, field: &str) -> Option<T> {
        self.get(field).and_then(|v| v.parse().ok())
    }

    /// Parse `field`, falling back to `default` when absent or malformed
    pub fn parse_or<T: FromStr>(&self, field: &str, default: T) -> ParsedField<T> {
        match self.number(field) {
            Some(value) => ParsedField::Parsed(value),
            None => ParsedField::Defaulted(default),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawLightRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<HashMap<String, String>> for RawLightRow {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map)
    }
}

/// A numeric field value that remembers whether it came from the input
/// or from the per-field default
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedField<T> {
    Parsed(T),
    Defaulted(T),
}

impl<T: Copy> ParsedField<T> {
    pub fn value(&self) -> T {
        match self {
            Self::Parsed(v) | Self::Defaulted(v) => *v,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, Self::Defaulted(_))
    }
}
