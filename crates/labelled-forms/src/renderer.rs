//! The input rendering seam.
//!
//! The host framework generates the actual input elements; the builder
//! only wraps them. [`InputRenderer`] is that seam, and
//! [`HtmlInputRenderer`] is a plain-HTML implementation for standalone
//! use and tests.

use labelled_markup::{content_tag, escape, tag, TagAttrs};
use labelled_model::field_id;

/// The closed set of input kinds the builder knows how to wrap.
///
/// Check boxes are deliberately not part of this set; they render as
/// boolean fields with their own markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Single-line text input.
    Text,
    /// Password input.
    Password,
    /// Hidden input.
    Hidden,
    /// Multi-line text area.
    TextArea,
    /// File upload input.
    File,
    /// Date selection, rendered as a multi-field.
    DateSelect,
    /// Date and time selection, rendered as a multi-field.
    DatetimeSelect,
}

impl InputKind {
    /// Every input kind, in wrapping-table order.
    pub const ALL: [Self; 7] = [
        Self::Text,
        Self::Password,
        Self::Hidden,
        Self::TextArea,
        Self::File,
        Self::DateSelect,
        Self::DatetimeSelect,
    ];

    /// Whether fields of this kind group several inputs under one label.
    pub const fn is_multi(self) -> bool {
        matches!(self, Self::DateSelect | Self::DatetimeSelect)
    }

    /// Whether inputs of this kind carry the `text` class.
    pub const fn is_text_styled(self) -> bool {
        matches!(self, Self::Text | Self::Password)
    }
}

/// State threaded through a rendering operation.
///
/// Replaces the original process-wide toggle: whether the renderer may
/// apply its own error decoration to an input is carried here, scoped
/// to the call chain instead of global state.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext {
    /// Whether the renderer's own error decoration is active.
    pub error_wrapping: bool,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            error_wrapping: true,
        }
    }
}

/// Renders the input element for a bound attribute.
///
/// Implemented by the host framework's input generation; the builder
/// wraps whatever markup this produces.
pub trait InputRenderer {
    /// Renders one input element.
    ///
    /// # Arguments
    /// * `kind` - which input to produce
    /// * `ctx` - rendering state, including the error-decoration flag
    /// * `object_name` - the bound object's name
    /// * `attribute` - the bound attribute
    /// * `value` - the attribute's current value, if any
    /// * `attrs` - additional HTML attributes for the input element
    fn render_input(
        &self,
        kind: InputKind,
        ctx: &RenderContext,
        object_name: &str,
        attribute: &str,
        value: Option<&str>,
        attrs: &TagAttrs,
    ) -> String;
}

/// A plain HTML input renderer.
///
/// Produces unstyled standard inputs with `{object}_{attribute}` ids
/// and `{object}[{attribute}]` names. Date kinds use native date
/// inputs; hosts that want composite select groups supply their own
/// renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlInputRenderer;

impl InputRenderer for HtmlInputRenderer {
    fn render_input(
        &self,
        kind: InputKind,
        _ctx: &RenderContext,
        object_name: &str,
        attribute: &str,
        value: Option<&str>,
        attrs: &TagAttrs,
    ) -> String {
        let mut attrs = attrs.clone();
        if !attrs.contains("id") {
            attrs.set("id", field_id(object_name, attribute));
        }
        attrs.set("name", format!("{object_name}[{attribute}]"));

        match kind {
            InputKind::TextArea => content_tag(
                "textarea",
                &value.map(escape).unwrap_or_default(),
                &attrs,
            ),
            InputKind::Text | InputKind::Hidden => {
                input_tag(kind_type(kind), value, attrs)
            }
            // No value echo for passwords and file inputs.
            InputKind::Password | InputKind::File => input_tag(kind_type(kind), None, attrs),
            InputKind::DateSelect | InputKind::DatetimeSelect => {
                input_tag(kind_type(kind), value, attrs)
            }
        }
    }
}

const fn kind_type(kind: InputKind) -> &'static str {
    match kind {
        InputKind::Text => "text",
        InputKind::Password => "password",
        InputKind::Hidden => "hidden",
        InputKind::File => "file",
        InputKind::DateSelect => "date",
        InputKind::DatetimeSelect => "datetime-local",
        InputKind::TextArea => "textarea",
    }
}

fn input_tag(input_type: &str, value: Option<&str>, mut attrs: TagAttrs) -> String {
    attrs.set("type", input_type);
    if let Some(value) = value {
        attrs.set("value", value);
    }
    tag("input", &attrs)
}
