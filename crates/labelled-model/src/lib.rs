//! # labelled-model
//!
//! The model-side seam for the labelled-forms crates.
//!
//! This crate provides:
//! - The [`FormObject`] trait implemented by bound model-like objects
//! - DOM id derivation from object and attribute names
//! - A [`ValidationErrors`] collection for implementors
//! - A process-wide required-attribute registry keyed by model name
//!
//! ## Required attributes
//!
//! ```rust
//! use labelled_model::{declare_required, required_attributes, Phase};
//!
//! declare_required("invoice", ["number"], Phase::Save);
//! declare_required("invoice", ["customer"], Phase::Create);
//!
//! // A new record needs both the save-phase and create-phase attributes.
//! assert_eq!(required_attributes("invoice", true), ["number", "customer"]);
//! // A persisted record only needs the save-phase ones.
//! assert_eq!(required_attributes("invoice", false), ["number"]);
//! ```

mod object;
mod required;
mod validation;

pub use object::{field_container_id, field_id, FormObject};
pub use required::{
    declare_required, is_required, required_attributes, Phase, RequiredAttributes,
};
pub use validation::ValidationErrors;
