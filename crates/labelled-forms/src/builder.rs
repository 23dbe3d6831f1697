//! The labelled form builder.
//!
//! Wraps input markup produced through the [`InputRenderer`] seam in
//! labelled, CSS-classed containers. The builder composes over the
//! host's rendering rather than extending it: it holds the bound
//! object and a renderer reference and augments their output.

use labelled_markup::{tag, CssClassList, TagAttrs};
use labelled_model::{field_id, FormObject};

use crate::caption::derive_caption;
use crate::error::Result;
use crate::field::{write_merged, Body};
use crate::label;
use crate::options::{merge_field_options, FieldOptions};
use crate::renderer::{HtmlInputRenderer, InputKind, InputRenderer, RenderContext};
use crate::section::{write_form_section, SectionBuilder, SectionOptions};

const PLAIN_RENDERER: HtmlInputRenderer = HtmlInputRenderer;

/// Options accepted by the builder's input methods.
///
/// `attrs` applies to the input element itself; `field_options` to the
/// wrapping container.
#[derive(Debug, Clone, Default)]
pub struct InputOptions {
    /// Explicit label caption.
    pub label: Option<String>,
    /// Options for the wrapping field container.
    pub field_options: FieldOptions,
    /// HTML attributes for the input element.
    pub attrs: TagAttrs,
}

impl InputOptions {
    /// Creates empty input options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label caption.
    #[must_use]
    pub fn label(mut self, caption: impl Into<String>) -> Self {
        self.label = Some(caption.into());
        self
    }

    /// Sets the wrapping container options.
    #[must_use]
    pub fn field_options(mut self, options: FieldOptions) -> Self {
        self.field_options = options;
        self
    }

    /// Sets an HTML attribute on the input element.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }
}

/// A non-labelling rendering handle forwarded to nested callbacks.
///
/// Multi-input fields pass one of these to their callback so sub-fields
/// can render raw inputs inside the shared wrapper.
pub struct FieldScope<'a, O: FormObject> {
    object: &'a O,
    renderer: &'a dyn InputRenderer,
    context: RenderContext,
}

impl<'a, O: FormObject> FieldScope<'a, O> {
    /// The bound object.
    pub fn object(&self) -> &'a O {
        self.object
    }

    /// Renders a raw input element for a bound attribute, unwrapped.
    pub fn input(&self, kind: InputKind, attribute: &str, attrs: &TagAttrs) -> String {
        self.renderer.render_input(
            kind,
            &self.context,
            self.object.object_name(),
            attribute,
            self.object.attribute_value(attribute).as_deref(),
            attrs,
        )
    }

    /// Renders a raw text input for a bound attribute.
    pub fn text_field(&self, attribute: &str) -> String {
        self.input(InputKind::Text, attribute, &TagAttrs::new())
    }

    /// Renders a label for a bound attribute.
    pub fn label(&self, attribute: &str, caption: Option<&str>) -> String {
        label::label(self.object.object_name(), attribute, caption, &TagAttrs::new())
    }
}

/// Builds labelled fields for a bound object.
pub struct LabelledBuilder<'a, O: FormObject> {
    object: &'a O,
    renderer: &'a dyn InputRenderer,
    error_wrapping: bool,
}

impl<'a, O: FormObject> LabelledBuilder<'a, O> {
    /// Creates a builder over the given object and input renderer.
    pub fn new(object: &'a O, renderer: &'a dyn InputRenderer) -> Self {
        Self {
            object,
            renderer,
            error_wrapping: true,
        }
    }

    /// Creates a builder using the plain HTML input renderer.
    pub fn plain(object: &'a O) -> Self {
        Self::new(object, &PLAIN_RENDERER)
    }

    /// The bound object.
    pub fn object(&self) -> &'a O {
        self.object
    }

    /// Whether the renderer's own error decoration is currently active.
    pub fn error_wrapping(&self) -> bool {
        self.error_wrapping
    }

    /// Runs `f` with the renderer's error decoration suspended,
    /// restoring the previous state afterwards, also on failure.
    pub fn without_error_wrapping<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let previous = std::mem::replace(&mut self.error_wrapping, false);
        let result = f(self);
        self.error_wrapping = previous;
        result
    }

    /// Renders an input of the given kind and wraps it in a labelled
    /// field container.
    ///
    /// Text and password inputs gain the `text` class; date kinds wrap
    /// as multi-fields, everything else as value fields. The inner
    /// input renders with error decoration suspended since the
    /// container itself carries the error class.
    pub fn input(
        &mut self,
        kind: InputKind,
        attribute: &str,
        options: InputOptions,
    ) -> Result<String> {
        let InputOptions {
            label,
            field_options,
            mut attrs,
        } = options;

        if kind.is_text_styled() {
            let mut class = CssClassList::parse("text");
            if let Some(extra) = attrs.get("class") {
                class.extend_parse(extra);
            }
            attrs.set("class", class.to_string());
        }

        let value = self.object.attribute_value(attribute);
        let rendered = self.without_error_wrapping(|builder| {
            let ctx = RenderContext {
                error_wrapping: builder.error_wrapping,
            };
            builder.renderer.render_input(
                kind,
                &ctx,
                builder.object.object_name(),
                attribute,
                value.as_deref(),
                &attrs,
            )
        });

        let mut builder_defaults = FieldOptions::new();
        builder_defaults.label = label;
        builder_defaults.content = Some(rendered);

        let mut out = String::new();
        self.write_wrapped(
            &mut out,
            &[attribute],
            field_options,
            builder_defaults,
            kind.is_multi(),
            None,
        )?;
        Ok(out)
    }

    /// Renders a labelled text field.
    pub fn text_field(&mut self, attribute: &str, options: InputOptions) -> Result<String> {
        self.input(InputKind::Text, attribute, options)
    }

    /// Renders a labelled password field.
    pub fn password_field(&mut self, attribute: &str, options: InputOptions) -> Result<String> {
        self.input(InputKind::Password, attribute, options)
    }

    /// Renders a labelled hidden field.
    pub fn hidden_field(&mut self, attribute: &str, options: InputOptions) -> Result<String> {
        self.input(InputKind::Hidden, attribute, options)
    }

    /// Renders a labelled text area.
    pub fn text_area(&mut self, attribute: &str, options: InputOptions) -> Result<String> {
        self.input(InputKind::TextArea, attribute, options)
    }

    /// Renders a labelled file field.
    pub fn file_field(&mut self, attribute: &str, options: InputOptions) -> Result<String> {
        self.input(InputKind::File, attribute, options)
    }

    /// Renders a labelled date selection as a multi-field.
    pub fn date_select(&mut self, attribute: &str, options: InputOptions) -> Result<String> {
        self.input(InputKind::DateSelect, attribute, options)
    }

    /// Renders a labelled date and time selection as a multi-field.
    pub fn datetime_select(&mut self, attribute: &str, options: InputOptions) -> Result<String> {
        self.input(InputKind::DatetimeSelect, attribute, options)
    }

    /// Wraps literal content (from the `content` option) in a labelled
    /// value field for an attribute.
    ///
    /// The caption is derived from the attribute name unless a `label`
    /// option is given, and the label links to the attribute's input
    /// id. Supplying no `content` option is a usage error.
    pub fn field_for(&self, attribute: &str, options: FieldOptions) -> Result<String> {
        let mut out = String::new();
        self.write_field_for(&mut out, attribute, options)?;
        Ok(out)
    }

    /// Streaming variant of [`Self::field_for`].
    pub fn write_field_for(
        &self,
        out: &mut String,
        attribute: &str,
        options: FieldOptions,
    ) -> Result<()> {
        self.write_wrapped(out, &[attribute], options, FieldOptions::new(), false, None)
    }

    /// Wraps callback-rendered content in a labelled value field for an
    /// attribute. The callback receives a [`FieldScope`] for rendering
    /// raw sub-inputs.
    pub fn field_for_with<F>(
        &self,
        attribute: &str,
        options: FieldOptions,
        render: F,
    ) -> Result<String>
    where
        F: FnOnce(&FieldScope<'a, O>, &mut String),
    {
        let mut out = String::new();
        let scope = self.scope();
        let body = Body::render(move |buffer: &mut String| render(&scope, buffer));
        self.write_wrapped(
            &mut out,
            &[attribute],
            options,
            FieldOptions::new(),
            false,
            Some(body),
        )?;
        Ok(out)
    }

    /// Groups several bound attributes under one label as a
    /// multi-field.
    ///
    /// The caption is derived from the first attribute unless a `label`
    /// option is given, and the field is flagged with
    /// `field_with_errors` when any grouped attribute has an error. The
    /// body renders inside a `multi_input` span through the callback,
    /// which receives a [`FieldScope`].
    pub fn field<F>(&self, attributes: &[&str], options: FieldOptions, render: F) -> Result<String>
    where
        F: FnOnce(&FieldScope<'a, O>, &mut String),
    {
        let mut out = String::new();
        self.write_field(&mut out, attributes, options, render)?;
        Ok(out)
    }

    /// Streaming variant of [`Self::field`].
    pub fn write_field<F>(
        &self,
        out: &mut String,
        attributes: &[&str],
        options: FieldOptions,
        render: F,
    ) -> Result<()>
    where
        F: FnOnce(&FieldScope<'a, O>, &mut String),
    {
        let scope = self.scope();
        let body = Body::render(move |buffer: &mut String| render(&scope, buffer));
        self.write_wrapped(out, attributes, options, FieldOptions::new(), true, Some(body))
    }

    /// Renders a submit button wrapped in a `submit` div.
    pub fn submit(&self, caption: &str) -> String {
        let input = tag(
            "input",
            &TagAttrs::new().with("type", "submit").with("value", caption),
        );
        format!(r#"<div class="submit">{input}</div>"#)
    }

    /// Creates a form section; the callback receives this builder and
    /// the section under construction.
    pub fn section<F>(&self, options: SectionOptions, configure: F) -> String
    where
        F: FnOnce(&Self, &mut SectionBuilder),
    {
        let mut out = String::new();
        write_form_section(&mut out, options, |section| configure(self, section));
        out
    }

    fn scope(&self) -> FieldScope<'a, O> {
        FieldScope {
            object: self.object,
            renderer: self.renderer,
            context: RenderContext {
                error_wrapping: self.error_wrapping,
            },
        }
    }

    fn write_wrapped(
        &self,
        out: &mut String,
        attributes: &[&str],
        explicit: FieldOptions,
        builder_defaults: FieldOptions,
        is_multi: bool,
        body: Option<Body<'_>>,
    ) -> Result<()> {
        let mut computed = FieldOptions::new();
        computed
            .class
            .push(if is_multi { "multi_field" } else { "value_field" });
        if attributes
            .iter()
            .any(|attribute| self.object.has_error(attribute))
        {
            computed.class.push("field_with_errors");
        }
        computed.class.push("field");

        if let Some(first) = attributes.first() {
            computed.label = Some(derive_caption(first));
        }

        let element_id = if !is_multi && attributes.len() == 1 {
            Some(field_id(self.object.object_name(), attributes[0]))
        } else {
            None
        };

        if is_multi {
            computed.wrap = Some((
                r#"<span class="multi_input">"#.to_string(),
                "</span>".to_string(),
            ));
        }

        let merged = merge_field_options(explicit, builder_defaults, computed);
        write_merged(out, element_id.as_deref(), merged, body)
    }
}
