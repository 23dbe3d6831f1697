//! The field wrapper: container, label and body markup.

use labelled_markup::tag;

use crate::error::{FormsError, Result};
use crate::label::label_tag;
use crate::options::{merge_field_options, FieldOptions};

/// The body of a wrapped field: either literal markup or a render
/// callback that appends sub-field markup to the output buffer.
pub enum Body<'a> {
    /// Literal body markup, inserted as-is.
    Literal(String),
    /// A callback writing the body into the open output buffer.
    Render(Box<dyn FnOnce(&mut String) + 'a>),
}

impl<'a> Body<'a> {
    /// Creates a literal body.
    pub fn literal(markup: impl Into<String>) -> Self {
        Self::Literal(markup.into())
    }

    /// Creates a callback body.
    pub fn render(callback: impl FnOnce(&mut String) + 'a) -> Self {
        Self::Render(Box::new(callback))
    }
}

impl std::fmt::Debug for Body<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(markup) => f.debug_tuple("Literal").field(markup).finish(),
            Self::Render(_) => f.write_str("Render(..)"),
        }
    }
}

/// Wraps body markup in a labelled `div` container and returns it.
///
/// The container carries the `field` class plus any classes from
/// `options`; the label links to `element_id` when given. The body is
/// taken from the `body` argument, falling back to the `content`
/// option; supplying neither is a usage error.
pub fn labelled_field(
    caption: &str,
    element_id: Option<&str>,
    options: FieldOptions,
    body: Option<Body<'_>>,
) -> Result<String> {
    let mut out = String::new();
    write_labelled_field(&mut out, caption, element_id, options, body)?;
    Ok(out)
}

/// Streaming variant of [`labelled_field`]: appends to an open output
/// buffer instead of returning a string. Both produce identical bytes
/// for the same logical inputs.
pub fn write_labelled_field(
    out: &mut String,
    caption: &str,
    element_id: Option<&str>,
    mut options: FieldOptions,
    body: Option<Body<'_>>,
) -> Result<()> {
    options.label = Some(caption.to_string());

    let mut computed = FieldOptions::new();
    computed.class.push("field");

    let merged = merge_field_options(options, FieldOptions::new(), computed);
    write_merged(out, element_id, merged, body)
}

/// Emits a field from fully merged options. The builder layers its own
/// computed defaults before calling this.
pub(crate) fn write_merged(
    out: &mut String,
    element_id: Option<&str>,
    options: FieldOptions,
    body: Option<Body<'_>>,
) -> Result<()> {
    let FieldOptions {
        label,
        label_options,
        class,
        id,
        wrap,
        content,
        attrs,
    } = options;

    let body = match (body, content) {
        (Some(body), _) => body,
        (None, Some(content)) => Body::Literal(content),
        (None, None) => return Err(FormsError::MissingContent),
    };

    let mut container_attrs = attrs;
    if !class.is_empty() {
        container_attrs.set("class", class.to_string());
    }
    if let Some(id) = id {
        container_attrs.set("id", id);
    }

    let (before, after) = wrap.unwrap_or_default();

    out.push_str(&tag("div", &container_attrs));
    out.push_str(&label_tag(element_id, label.as_deref(), &label_options));
    out.push_str(&before);
    match body {
        Body::Literal(markup) => out.push_str(&markup),
        Body::Render(render) => render(out),
    }
    out.push_str(&after);
    out.push_str("</div>");
    Ok(())
}
