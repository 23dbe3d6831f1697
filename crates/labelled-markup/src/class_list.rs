//! Ordered CSS class list with token validation.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{MarkupError, Result};

static CLASS_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]\w*$").expect("class name pattern"));

/// A class attribute value as found in a loosely-typed options map.
///
/// Option maps forward arbitrary values; only text, token lists and an
/// absent value can be interpreted as class names. Anything else is
/// carried as [`ClassValue::Other`] and rejected by strict construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassValue {
    /// A space-separated list of class names.
    Text(String),
    /// An already-split list of class names.
    Tokens(Vec<String>),
    /// No value supplied.
    Missing,
    /// A value of an unsupported shape, described for the error message.
    Other(String),
}

/// Stores an ordered list of CSS class names.
///
/// Tokens must match `^[A-Za-z]\w*$`. Duplicates are permitted and
/// insertion order is preserved; `Display` joins the names with spaces,
/// ready for a `class` attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssClassList {
    class_names: Vec<String>,
}

impl CssClassList {
    /// Creates an empty class list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a space-separated class string, silently dropping any
    /// token that is not a valid class name.
    pub fn parse(input: &str) -> Self {
        Self::from_tokens(input.split(' '))
    }

    /// Builds a class list from a token sequence, silently dropping
    /// invalid tokens.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            class_names: tokens
                .into_iter()
                .map(Into::into)
                .filter(|token| Self::is_valid_token(token))
                .collect(),
        }
    }

    /// Strict construction from an options-map value.
    ///
    /// Text and token-list values parse leniently (invalid tokens are
    /// dropped), a missing value yields an empty list, and any other
    /// value shape is an error.
    pub fn from_value(value: &ClassValue) -> Result<Self> {
        match value {
            ClassValue::Text(input) => Ok(Self::parse(input)),
            ClassValue::Tokens(tokens) => Ok(Self::from_tokens(tokens.iter().cloned())),
            ClassValue::Missing => Ok(Self::new()),
            ClassValue::Other(description) => {
                Err(MarkupError::InvalidClassValue(description.clone()))
            }
        }
    }

    /// Returns whether `token` is a valid CSS class name.
    pub fn is_valid_token(token: &str) -> bool {
        CLASS_NAME_RE.is_match(token)
    }

    /// Appends a single class name, silently ignoring invalid tokens.
    pub fn push(&mut self, token: impl Into<String>) {
        let token = token.into();
        if Self::is_valid_token(&token) {
            self.class_names.push(token);
        }
    }

    /// Parses and appends a space-separated class string, dropping
    /// invalid tokens.
    pub fn extend_parse(&mut self, input: &str) {
        self.class_names.extend(Self::parse(input).class_names);
    }

    /// Appends all class names from another list.
    pub fn extend(&mut self, other: &Self) {
        self.class_names.extend(other.class_names.iter().cloned());
    }

    /// Returns whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.class_names.is_empty()
    }

    /// Returns the number of class names, duplicates included.
    pub fn len(&self) -> usize {
        self.class_names.len()
    }

    /// Returns whether the list contains `token`.
    pub fn contains(&self, token: &str) -> bool {
        self.class_names.iter().any(|name| name == token)
    }

    /// Iterates over the class names in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.class_names.iter().map(String::as_str)
    }
}

impl fmt::Display for CssClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class_names.join(" "))
    }
}

impl std::ops::Add for CssClassList {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self.extend(&other);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_token() {
        assert!(CssClassList::is_valid_token("valid_class"));
        assert!(!CssClassList::is_valid_token("invalid class"));
        assert!(!CssClassList::is_valid_token("1digit"));
        assert!(!CssClassList::is_valid_token(""));
    }

    #[test]
    fn test_parse_round_trip() {
        let classes = CssClassList::parse("one two three");
        assert_eq!(classes.to_string(), "one two three");
        // Parsing the serialized form again is idempotent.
        assert_eq!(CssClassList::parse(&classes.to_string()), classes);
    }

    #[test]
    fn test_parse_drops_invalid_tokens() {
        let classes = CssClassList::parse("one 2bad three");
        assert_eq!(classes.to_string(), "one three");
    }

    #[test]
    fn test_from_tokens() {
        let classes = CssClassList::from_tokens(["one", "two", "three"]);
        assert_eq!(classes.to_string(), "one two three");
    }

    #[test]
    fn test_from_value_strict() {
        let classes = CssClassList::from_value(&ClassValue::Text("one two".to_string()))
            .expect("text value parses");
        assert_eq!(classes.to_string(), "one two");

        assert!(CssClassList::from_value(&ClassValue::Missing)
            .expect("missing value parses")
            .is_empty());

        let err = CssClassList::from_value(&ClassValue::Other("symbol".to_string()));
        assert!(matches!(err, Err(MarkupError::InvalidClassValue(_))));
    }

    #[test]
    fn test_push_ignores_invalid() {
        let mut classes = CssClassList::new();
        classes.push("field");
        classes.push("invalid class");
        assert_eq!(classes.to_string(), "field");
    }

    #[test]
    fn test_duplicates_preserved() {
        let classes = CssClassList::parse("field field");
        assert_eq!(classes.len(), 2);
        assert_eq!(classes.to_string(), "field field");
    }

    #[test]
    fn test_add() {
        let classes = CssClassList::parse("value_field field") + CssClassList::parse("highlight");
        assert_eq!(classes.to_string(), "value_field field highlight");
    }
}
