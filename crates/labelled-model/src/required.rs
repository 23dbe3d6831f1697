//! Process-wide required-attribute registry.
//!
//! Models declare which attributes are mandatory for a lifecycle phase
//! at definition time; the view layer reads the declarations at render
//! time to mark required fields. Declarations are additive and never
//! retracted.

use std::collections::HashMap;
use std::sync::{LazyLock, PoisonError, RwLock};

use tracing::debug;

use crate::object::FormObject;

/// A lifecycle moment at which a required-attribute check applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Applies whenever the object is saved.
    #[default]
    Save,
    /// Applies only when a new record is created.
    Create,
    /// Applies only when an existing record is updated.
    Update,
}

#[derive(Debug, Default)]
struct PhaseSets {
    save: Vec<String>,
    create: Vec<String>,
    update: Vec<String>,
}

impl PhaseSets {
    fn phase(&self, phase: Phase) -> &[String] {
        match phase {
            Phase::Save => &self.save,
            Phase::Create => &self.create,
            Phase::Update => &self.update,
        }
    }

    fn phase_mut(&mut self, phase: Phase) -> &mut Vec<String> {
        match phase {
            Phase::Save => &mut self.save,
            Phase::Create => &mut self.create,
            Phase::Update => &mut self.update,
        }
    }
}

static REGISTRY: LazyLock<RwLock<HashMap<String, PhaseSets>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

const fn instance_phase(is_new: bool) -> Phase {
    if is_new {
        Phase::Create
    } else {
        Phase::Update
    }
}

/// Registers attributes as required for a model under a lifecycle phase.
///
/// Declarations are additive; re-declaring an attribute for the same
/// phase is a no-op. Use [`Phase::Save`] for attributes required on
/// every save.
pub fn declare_required<I, S>(model_name: &str, attributes: I, phase: Phase)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut registry = REGISTRY.write().unwrap_or_else(PoisonError::into_inner);
    let bucket = registry
        .entry(model_name.to_string())
        .or_default()
        .phase_mut(phase);
    for attribute in attributes {
        let attribute = attribute.into();
        if !bucket.contains(&attribute) {
            bucket.push(attribute);
        }
    }
    debug!(model = model_name, ?phase, "declared required attributes");
}

/// Returns whether an attribute is required for a model instance state.
///
/// Checks the `save` phase plus `create` for new records, or `update`
/// for persisted ones.
pub fn is_required(model_name: &str, attribute: &str, is_new: bool) -> bool {
    let registry = REGISTRY.read().unwrap_or_else(PoisonError::into_inner);
    registry.get(model_name).is_some_and(|sets| {
        sets.phase(Phase::Save).iter().any(|name| name == attribute)
            || sets
                .phase(instance_phase(is_new))
                .iter()
                .any(|name| name == attribute)
    })
}

/// Returns the de-duplicated union of attributes required for a model
/// instance state, in declaration order.
pub fn required_attributes(model_name: &str, is_new: bool) -> Vec<String> {
    let registry = REGISTRY.read().unwrap_or_else(PoisonError::into_inner);
    let Some(sets) = registry.get(model_name) else {
        return Vec::new();
    };

    let mut names: Vec<String> = Vec::new();
    for name in sets
        .phase(Phase::Save)
        .iter()
        .chain(sets.phase(instance_phase(is_new)))
    {
        if !names.contains(name) {
            names.push(name.clone());
        }
    }
    names
}

/// Required-attribute queries scoped to a bound object.
pub trait RequiredAttributes: FormObject {
    /// Returns whether the attribute is required for this object,
    /// given its persistence state.
    fn attribute_required(&self, attribute: &str) -> bool {
        is_required(self.object_name(), attribute, self.is_new_record())
    }

    /// Returns the attributes required for this object.
    fn required_attributes(&self) -> Vec<String> {
        required_attributes(self.object_name(), self.is_new_record())
    }
}

impl<T: FormObject + ?Sized> RequiredAttributes for T {}

#[cfg(test)]
mod tests {
    use super::*;

    // The registry is process-wide and tests run in parallel, so each
    // test uses its own model name.

    #[test]
    fn test_save_phase_applies_to_both_states() {
        declare_required("req_test_save", ["name"], Phase::Save);

        assert!(is_required("req_test_save", "name", true));
        assert!(is_required("req_test_save", "name", false));
    }

    #[test]
    fn test_create_and_update_phases() {
        declare_required("req_test_phases", ["password"], Phase::Create);
        declare_required("req_test_phases", ["reason"], Phase::Update);

        assert!(is_required("req_test_phases", "password", true));
        assert!(!is_required("req_test_phases", "password", false));
        assert!(!is_required("req_test_phases", "reason", true));
        assert!(is_required("req_test_phases", "reason", false));
    }

    #[test]
    fn test_union_is_deduplicated() {
        declare_required("req_test_union", ["name", "email"], Phase::Save);
        declare_required("req_test_union", ["name", "password"], Phase::Create);

        assert_eq!(
            required_attributes("req_test_union", true),
            ["name", "email", "password"]
        );
        assert_eq!(required_attributes("req_test_union", false), ["name", "email"]);
    }

    #[test]
    fn test_redeclaration_is_additive() {
        declare_required("req_test_add", ["name"], Phase::Save);
        declare_required("req_test_add", ["name"], Phase::Save);
        declare_required("req_test_add", ["email"], Phase::Save);

        assert_eq!(required_attributes("req_test_add", false), ["name", "email"]);
    }

    #[test]
    fn test_unknown_model() {
        assert!(!is_required("req_test_unknown", "name", true));
        assert!(required_attributes("req_test_unknown", true).is_empty());
    }

    struct Account {
        persisted: bool,
    }

    impl FormObject for Account {
        fn object_name(&self) -> &str {
            "req_test_account"
        }

        fn is_new_record(&self) -> bool {
            !self.persisted
        }
    }

    #[test]
    fn test_object_scoped_queries() {
        declare_required("req_test_account", ["login"], Phase::Save);
        declare_required("req_test_account", ["password"], Phase::Create);

        let fresh = Account { persisted: false };
        let saved = Account { persisted: true };

        assert!(fresh.attribute_required("password"));
        assert!(!saved.attribute_required("password"));
        assert_eq!(
            RequiredAttributes::required_attributes(&fresh),
            ["login", "password"]
        );
        assert_eq!(RequiredAttributes::required_attributes(&saved), ["login"]);
    }
}
