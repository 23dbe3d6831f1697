//! Field options and the layered option merger.

use labelled_markup::{CssClassList, TagAttrs};

/// Options accepted by field wrappers.
///
/// Recognized keys of the original option hash become typed fields;
/// anything else passes through as container element attributes via
/// [`FieldOptions::attrs`].
#[derive(Debug, Clone, Default)]
pub struct FieldOptions {
    /// Explicit label caption, overriding the derived one.
    pub label: Option<String>,
    /// Extra HTML attributes for the label tag.
    pub label_options: TagAttrs,
    /// CSS classes for the container element.
    pub class: CssClassList,
    /// Id attribute of the container element.
    pub id: Option<String>,
    /// Markup fragments inserted immediately before and after the body.
    pub wrap: Option<(String, String)>,
    /// Literal body markup.
    pub content: Option<String>,
    /// Pass-through attributes for the container element.
    pub attrs: TagAttrs,
}

impl FieldOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label caption.
    #[must_use]
    pub fn label(mut self, caption: impl Into<String>) -> Self {
        self.label = Some(caption.into());
        self
    }

    /// Sets an HTML attribute on the label tag.
    #[must_use]
    pub fn label_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.label_options.set(key, value);
        self
    }

    /// Appends container classes parsed from a space-separated string.
    #[must_use]
    pub fn class(mut self, input: &str) -> Self {
        self.class.extend_parse(input);
        self
    }

    /// Sets the container id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the wrap fragments surrounding the body.
    #[must_use]
    pub fn wrap(mut self, before: impl Into<String>, after: impl Into<String>) -> Self {
        self.wrap = Some((before.into(), after.into()));
        self
    }

    /// Sets literal body markup.
    #[must_use]
    pub fn content(mut self, markup: impl Into<String>) -> Self {
        self.content = Some(markup.into());
        self
    }

    /// Sets a pass-through attribute on the container element.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }
}

/// Merges field options with explicit > builder default > computed
/// default precedence.
///
/// The one exception is `class`: class lists concatenate instead of
/// overwriting, computed defaults first, builder defaults next,
/// explicit classes last. Overwriting would silently drop structural
/// classes (`value_field`, `multi_field`, `boolean_field`,
/// `field_with_errors`) needed for styling.
pub fn merge_field_options(
    explicit: FieldOptions,
    builder_defaults: FieldOptions,
    computed_defaults: FieldOptions,
) -> FieldOptions {
    let mut merged = computed_defaults;
    overlay(&mut merged, builder_defaults);
    overlay(&mut merged, explicit);
    merged
}

fn overlay(base: &mut FieldOptions, layer: FieldOptions) {
    if layer.label.is_some() {
        base.label = layer.label;
    }
    if layer.id.is_some() {
        base.id = layer.id;
    }
    if layer.wrap.is_some() {
        base.wrap = layer.wrap;
    }
    if layer.content.is_some() {
        base.content = layer.content;
    }
    for (key, value) in layer.label_options.iter() {
        base.label_options.set(key, value);
    }
    for (key, value) in layer.attrs.iter() {
        base.attrs.set(key, value);
    }
    base.class.extend(&layer.class);
}
