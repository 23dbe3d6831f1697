#![allow(dead_code)]

use labelled_model::{FormObject, ValidationErrors};

/// Shared fixture object bound as `invoice` with a few attributes
/// carrying fixed values.
pub struct Invoice {
    errors: ValidationErrors,
    new_record: bool,
}

impl Invoice {
    pub fn new() -> Self {
        Self {
            errors: ValidationErrors::new(),
            new_record: true,
        }
    }

    pub fn saved() -> Self {
        Self {
            errors: ValidationErrors::new(),
            new_record: false,
        }
    }

    pub fn with_error(attribute: &str) -> Self {
        let mut errors = ValidationErrors::new();
        errors.add(attribute, "can't be blank");
        Self {
            errors,
            new_record: true,
        }
    }
}

impl FormObject for Invoice {
    fn object_name(&self) -> &str {
        "invoice"
    }

    fn is_new_record(&self) -> bool {
        self.new_record
    }

    fn has_error(&self, attribute: &str) -> bool {
        self.errors.has_error(attribute)
    }

    fn attribute_value(&self, attribute: &str) -> Option<String> {
        match attribute {
            "number" => Some("INV-1".to_string()),
            "customer" => Some("Acme".to_string()),
            "paid" => Some("1".to_string()),
            _ => None,
        }
    }
}
