//! Labelled form generation.
//!
//! Helpers that wrap input markup in consistently labelled and
//! CSS-classed containers, so stylesheets can lay out entire forms
//! from structure alone. Inputs themselves come from an
//! [`InputRenderer`]; this crate only decides captions, classes and
//! wrapper markup.
//!
//! # Wrapping a single field
//!
//! ```
//! use labelled_forms::{Body, labelled_field, FieldOptions};
//!
//! let html = labelled_field(
//!     "Name:",
//!     Some("var_name"),
//!     FieldOptions::new(),
//!     Some(Body::literal(r#"<input id="var_name" type="text">"#)),
//! )?;
//! assert_eq!(
//!     html,
//!     r#"<div class="field"><label for="var_name">Name:</label><input id="var_name" type="text"></div>"#
//! );
//! # Ok::<(), labelled_forms::FormsError>(())
//! ```
//!
//! # Building fields for a bound object
//!
//! ```
//! use labelled_forms::{FieldOptions, LabelledBuilder};
//! use labelled_model::FormObject;
//!
//! struct Invoice;
//!
//! impl FormObject for Invoice {
//!     fn object_name(&self) -> &str {
//!         "invoice"
//!     }
//!
//!     fn is_new_record(&self) -> bool {
//!         true
//!     }
//! }
//!
//! let invoice = Invoice;
//! let builder = LabelledBuilder::plain(&invoice);
//! let html = builder.field_for("number", FieldOptions::new().content("INV-1"))?;
//! assert_eq!(
//!     html,
//!     r#"<div class="value_field field"><label for="invoice_number">Number:</label>INV-1</div>"#
//! );
//! # Ok::<(), labelled_forms::FormsError>(())
//! ```

mod builder;
mod caption;
mod checkbox;
mod error;
mod field;
mod form;
mod label;
mod options;
mod renderer;
mod section;

pub use builder::{FieldScope, InputOptions, LabelledBuilder};
pub use caption::{derive_boolean_caption, derive_caption, humanize};
pub use checkbox::{labelled_check_box_tag, CheckBoxOptions};
pub use error::{FormsError, Result};
pub use field::{labelled_field, write_labelled_field, Body};
pub use form::{
    labelled_fields_for, labelled_form_for, write_labelled_form_for, FormOptions,
};
pub use label::{label, label_tag};
pub use options::{merge_field_options, FieldOptions};
pub use renderer::{HtmlInputRenderer, InputKind, InputRenderer, RenderContext};
pub use section::{form_section, write_form_section, SectionBuilder, SectionOptions};
