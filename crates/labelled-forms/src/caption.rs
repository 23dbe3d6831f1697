//! Caption derivation from attribute names.
//!
//! Purely mechanical: underscores become spaces and the first letter is
//! upper-cased. No inflection rules, no internationalization.

/// Turns a snake-case identifier into human-readable text.
pub fn humanize(identifier: &str) -> String {
    let spaced = identifier.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Derives a field caption from an attribute name (`"Name:"` style).
///
/// An empty identifier yields an empty caption with no colon; callers
/// supply an explicit caption in that case or accept blank text.
pub fn derive_caption(identifier: &str) -> String {
    if identifier.is_empty() {
        return String::new();
    }
    humanize(identifier) + ":"
}

/// Derives a caption for a boolean field (`"Name?"` style).
pub fn derive_boolean_caption(identifier: &str) -> String {
    if identifier.is_empty() {
        return String::new();
    }
    humanize(identifier) + "?"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("name"), "Name");
        assert_eq!(humanize("mailing_address"), "Mailing address");
        assert_eq!(humanize("address_line_1"), "Address line 1");
    }

    #[test]
    fn test_derive_caption() {
        assert_eq!(derive_caption("name"), "Name:");
        assert_eq!(derive_caption("mailing_address"), "Mailing address:");
    }

    #[test]
    fn test_derive_boolean_caption() {
        assert_eq!(derive_boolean_caption("name"), "Name?");
        assert_eq!(derive_boolean_caption("accepts_terms"), "Accepts terms?");
    }

    #[test]
    fn test_empty_identifier() {
        assert_eq!(derive_caption(""), "");
        assert_eq!(derive_boolean_caption(""), "");
    }
}
