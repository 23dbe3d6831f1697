//! The `FormObject` trait and DOM id derivation.

/// A model-like object that form fields can be bound to.
///
/// The form builder only needs a name for id derivation, the
/// persistence state, and access to validation errors and current
/// attribute values. Implementations typically delegate to the host
/// framework's model layer.
pub trait FormObject {
    /// The object name used to derive DOM ids (`{object_name}_{attribute}`).
    fn object_name(&self) -> &str;

    /// Returns whether this object has not yet been persisted.
    fn is_new_record(&self) -> bool;

    /// Returns whether the given attribute is flagged with a validation
    /// error. Objects without a validation layer report no errors.
    fn has_error(&self, _attribute: &str) -> bool {
        false
    }

    /// Returns the current value of the given attribute, if any.
    ///
    /// Used to fill input values and checkbox state. Objects that do
    /// not expose values render empty inputs.
    fn attribute_value(&self, _attribute: &str) -> Option<String> {
        None
    }
}

/// Derives the DOM id of the input bound to an attribute.
pub fn field_id(object_name: &str, attribute: &str) -> String {
    format!("{object_name}_{attribute}")
}

/// Derives the DOM id of the container wrapping an attribute's field.
pub fn field_container_id(object_name: &str, attribute: &str) -> String {
    format!("{object_name}_{attribute}_field")
}
