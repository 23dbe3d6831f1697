//! Tag construction with deterministic attribute ordering.

use std::collections::BTreeMap;

/// Escapes HTML special characters.
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Attributes for an HTML element.
///
/// Keys are kept sorted so that rendering the same logical attributes
/// always produces the same bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagAttrs {
    attrs: BTreeMap<String, String>,
}

impl TagAttrs {
    /// Creates an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    /// Gets an attribute value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// Removes an attribute and returns its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.attrs.remove(key)
    }

    /// Returns whether the attribute is present.
    pub fn contains(&self, key: &str) -> bool {
        self.attrs.contains_key(key)
    }

    /// Returns whether there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    /// Iterates over attributes in render order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Renders attributes as an HTML attribute string, values escaped.
    ///
    /// Each attribute is prefixed with a space, so the result can be
    /// appended directly after a tag name.
    pub fn to_html(&self) -> String {
        self.attrs
            .iter()
            .map(|(k, v)| format!(r#" {k}="{}""#, escape(v)))
            .collect()
    }
}

/// Builds an open tag (also used for void elements such as `input`).
pub fn tag(name: &str, attrs: &TagAttrs) -> String {
    format!("<{name}{}>", attrs.to_html())
}

/// Builds a tag around raw content.
///
/// The content is inserted as-is; callers escape text content themselves.
pub fn content_tag(name: &str, content: &str, attrs: &TagAttrs) -> String {
    format!("<{name}{}>{content}</{name}>", attrs.to_html())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("<script>"), "&lt;script&gt;");
        assert_eq!(escape("\"test\""), "&quot;test&quot;");
        assert_eq!(escape("a & b"), "a &amp; b");
        assert_eq!(escape("it's"), "it&#x27;s");
    }

    #[test]
    fn test_tag_without_attrs() {
        assert_eq!(tag("div", &TagAttrs::new()), "<div>");
    }

    #[test]
    fn test_tag_with_attrs() {
        let attrs = TagAttrs::new().with("class", "field").with("id", "var_name");
        assert_eq!(tag("div", &attrs), r#"<div class="field" id="var_name">"#);
    }

    #[test]
    fn test_attr_order_is_deterministic() {
        let a = TagAttrs::new().with("id", "x").with("class", "y");
        let b = TagAttrs::new().with("class", "y").with("id", "x");
        assert_eq!(a.to_html(), b.to_html());
    }

    #[test]
    fn test_content_tag() {
        let attrs = TagAttrs::new().with("for", "var_name");
        assert_eq!(
            content_tag("label", "Name:", &attrs),
            r#"<label for="var_name">Name:</label>"#
        );
    }

    #[test]
    fn test_attr_values_are_escaped() {
        let attrs = TagAttrs::new().with("title", r#"say "hi""#);
        assert_eq!(tag("span", &attrs), r#"<span title="say &quot;hi&quot;">"#);
    }

    #[test]
    fn test_set_replaces() {
        let mut attrs = TagAttrs::new();
        attrs.set("class", "one");
        attrs.set("class", "two");
        assert_eq!(attrs.get("class"), Some("two"));
    }
}
