//! # labelled-markup
//!
//! HTML construction primitives shared by the labelled-forms crates.
//!
//! This crate provides:
//! - HTML escaping
//! - Tag and content-tag construction with deterministic attribute order
//! - An ordered CSS class list with token validation
//!
//! ## Building tags
//!
//! ```rust
//! use labelled_markup::{content_tag, TagAttrs};
//!
//! let attrs = TagAttrs::new().with("for", "var_name");
//! let label = content_tag("label", "Name:", &attrs);
//! assert_eq!(label, r#"<label for="var_name">Name:</label>"#);
//! ```
//!
//! ## CSS class lists
//!
//! ```rust
//! use labelled_markup::CssClassList;
//!
//! let mut classes = CssClassList::parse("value_field field");
//! classes.push("highlight");
//! assert_eq!(classes.to_string(), "value_field field highlight");
//! ```

mod class_list;
mod error;
mod tag;

pub use class_list::{ClassValue, CssClassList};
pub use error::{MarkupError, Result};
pub use tag::{content_tag, escape, tag, TagAttrs};
