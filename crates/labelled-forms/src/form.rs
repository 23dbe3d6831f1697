//! Whole-form helpers.
//!
//! [`labelled_form_for`] emits the form element, an optional heading
//! and the standard `body`/`fields` div scaffolding, then hands a
//! [`LabelledBuilder`] to the callback for the fields themselves.

use labelled_markup::{content_tag, escape, tag, CssClassList, TagAttrs};
use labelled_model::FormObject;

use crate::builder::LabelledBuilder;
use crate::caption::humanize;
use crate::error::Result;
use crate::renderer::InputRenderer;

/// Options accepted by the form helpers.
#[derive(Debug, Clone, Default)]
pub struct FormOptions {
    /// Explicit form heading; the humanized object name otherwise.
    pub title: Option<String>,
    /// Suppresses the heading entirely.
    pub no_title: bool,
    /// Suppresses the `body` and `fields` scaffolding divs.
    pub no_divs: bool,
    /// Extra CSS classes for the form element.
    pub class: CssClassList,
    /// Pass-through attributes for the form element.
    pub attrs: TagAttrs,
}

impl FormOptions {
    /// Creates default form options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the form heading.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Suppresses the heading.
    #[must_use]
    pub fn no_title(mut self) -> Self {
        self.no_title = true;
        self
    }

    /// Suppresses the scaffolding divs.
    #[must_use]
    pub fn no_divs(mut self) -> Self {
        self.no_divs = true;
        self
    }

    /// Appends form classes parsed from a space-separated string.
    #[must_use]
    pub fn class(mut self, input: &str) -> Self {
        self.class.extend_parse(input);
        self
    }

    /// Sets a pass-through attribute on the form element.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }
}

/// Creates a labelled form for a bound object.
///
/// The form element carries the `labelled` class and posts to `action`;
/// the callback receives a builder bound to `object` plus the open
/// output buffer and writes the fields.
pub fn labelled_form_for<'a, O, F>(
    object: &'a O,
    renderer: &'a dyn InputRenderer,
    action: &str,
    options: FormOptions,
    render: F,
) -> Result<String>
where
    O: FormObject,
    F: FnOnce(&mut LabelledBuilder<'a, O>, &mut String) -> Result<()>,
{
    let mut out = String::new();
    write_labelled_form_for(&mut out, object, renderer, action, options, render)?;
    Ok(out)
}

/// Streaming variant of [`labelled_form_for`].
pub fn write_labelled_form_for<'a, O, F>(
    out: &mut String,
    object: &'a O,
    renderer: &'a dyn InputRenderer,
    action: &str,
    options: FormOptions,
    render: F,
) -> Result<()>
where
    O: FormObject,
    F: FnOnce(&mut LabelledBuilder<'a, O>, &mut String) -> Result<()>,
{
    let FormOptions {
        title,
        no_title,
        no_divs,
        class,
        attrs,
    } = options;

    let mut classes = CssClassList::parse("labelled");
    classes.extend(&class);
    let mut form_attrs = attrs;
    form_attrs.set("action", action);
    form_attrs.set("class", classes.to_string());
    if !form_attrs.contains("method") {
        form_attrs.set("method", "post");
    }

    out.push_str(&tag("form", &form_attrs));

    if !no_title {
        let heading = title.unwrap_or_else(|| humanize(object.object_name()));
        out.push_str(&content_tag("h1", &escape(&heading), &TagAttrs::new()));
    }

    if !no_divs {
        out.push_str(r#"<div class="body"><div class="fields">"#);
    }

    let mut builder = LabelledBuilder::new(object, renderer);
    render(&mut builder, out)?;

    if !no_divs {
        out.push_str("</div></div>");
    }
    out.push_str("</form>");
    Ok(())
}

/// Runs the callback with a builder bound to `object`, without any form
/// scaffolding. For fields rendered into an existing form.
pub fn labelled_fields_for<'a, O, F>(
    object: &'a O,
    renderer: &'a dyn InputRenderer,
    render: F,
) -> Result<String>
where
    O: FormObject,
    F: FnOnce(&mut LabelledBuilder<'a, O>, &mut String) -> Result<()>,
{
    let mut out = String::new();
    let mut builder = LabelledBuilder::new(object, renderer);
    render(&mut builder, &mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::FieldOptions;
    use crate::renderer::HtmlInputRenderer;

    struct Var;

    impl FormObject for Var {
        fn object_name(&self) -> &str {
            "var"
        }

        fn is_new_record(&self) -> bool {
            true
        }

        fn attribute_value(&self, attribute: &str) -> Option<String> {
            (attribute == "name").then(|| "test".to_string())
        }
    }

    #[test]
    fn test_form_scaffolding() {
        let html = labelled_form_for(
            &Var,
            &HtmlInputRenderer,
            "/vars",
            FormOptions::new().title("New variable"),
            |_, out| {
                out.push_str("FIELDS");
                Ok(())
            },
        )
        .expect("form renders");
        assert_eq!(
            html,
            concat!(
                r#"<form action="/vars" class="labelled" method="post">"#,
                "<h1>New variable</h1>",
                r#"<div class="body"><div class="fields">"#,
                "FIELDS",
                "</div></div></form>"
            )
        );
    }

    #[test]
    fn test_default_title_is_humanized_object_name() {
        let html = labelled_form_for(&Var, &HtmlInputRenderer, "/vars", FormOptions::new(), |_, out| {
            out.push_str("x");
            Ok(())
        })
        .expect("form renders");
        assert!(html.contains("<h1>Var</h1>"));
    }

    #[test]
    fn test_no_title_and_no_divs() {
        let html = labelled_form_for(
            &Var,
            &HtmlInputRenderer,
            "/vars",
            FormOptions::new().no_title().no_divs(),
            |_, out| {
                out.push_str("x");
                Ok(())
            },
        )
        .expect("form renders");
        assert_eq!(
            html,
            r#"<form action="/vars" class="labelled" method="post">x</form>"#
        );
    }

    #[test]
    fn test_method_override() {
        let html = labelled_form_for(
            &Var,
            &HtmlInputRenderer,
            "/search",
            FormOptions::new().attr("method", "get").no_title().no_divs(),
            |_, _| Ok(()),
        )
        .expect("form renders");
        assert!(html.contains(r#"method="get""#));
        assert!(!html.contains(r#"method="post""#));
    }

    #[test]
    fn test_builder_writes_fields() {
        let html = labelled_form_for(
            &Var,
            &HtmlInputRenderer,
            "/vars",
            FormOptions::new().no_title(),
            |form, out| {
                form.write_field_for(out, "name", FieldOptions::new().content("test"))?;
                out.push_str(&form.submit("Save"));
                Ok(())
            },
        )
        .expect("form renders");
        assert!(html.contains(r#"<div class="value_field field"><label for="var_name">Name:</label>test</div>"#));
        assert!(html.contains(r#"<div class="submit">"#));
    }

    #[test]
    fn test_fields_for_has_no_form_tag() {
        let html = labelled_fields_for(&Var, &HtmlInputRenderer, |form, out| {
            out.push_str(&form.field_for("name", FieldOptions::new().content("test"))?);
            Ok(())
        })
        .expect("fields render");
        assert!(!html.contains("<form"));
        assert!(html.starts_with(r#"<div class="value_field field">"#));
    }

    #[test]
    fn test_extra_form_class() {
        let html = labelled_form_for(
            &Var,
            &HtmlInputRenderer,
            "/vars",
            FormOptions::new().class("compact").no_title().no_divs(),
            |_, _| Ok(()),
        )
        .expect("form renders");
        assert!(html.contains(r#"class="labelled compact""#));
    }
}
