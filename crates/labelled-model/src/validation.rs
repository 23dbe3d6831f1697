//! Validation error collection.

use std::collections::HashMap;

/// Collection of validation errors by attribute.
///
/// Implementors of [`crate::FormObject`] can back their `has_error`
/// query with this type.
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors {
    errors: HashMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Creates a new empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an error for an attribute.
    pub fn add(&mut self, attribute: &str, message: impl Into<String>) {
        self.errors
            .entry(attribute.to_string())
            .or_default()
            .push(message.into());
    }

    /// Returns whether there are any errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of attributes with errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns whether the attribute is flagged with an error.
    pub fn has_error(&self, attribute: &str) -> bool {
        self.errors.contains_key(attribute)
    }

    /// Returns errors for a specific attribute.
    pub fn get(&self, attribute: &str) -> Option<&Vec<String>> {
        self.errors.get(attribute)
    }

    /// Returns all errors as a flat list.
    pub fn all_errors(&self) -> Vec<(&str, &str)> {
        self.errors
            .iter()
            .flat_map(|(attribute, messages)| {
                messages
                    .iter()
                    .map(move |msg| (attribute.as_str(), msg.as_str()))
            })
            .collect()
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (attribute, messages) in &self.errors {
            for message in messages {
                writeln!(f, "{attribute}: {message}")?;
            }
        }
        Ok(())
    }
}
