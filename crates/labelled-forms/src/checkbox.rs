//! Boolean (check box) fields.
//!
//! Check boxes do not go through the generic field wrapper: the label
//! follows the input and the container carries the `boolean_field`
//! class without the `field` class.

use labelled_markup::{content_tag, tag, CssClassList, TagAttrs};
use labelled_model::{field_id, FormObject};

use crate::builder::LabelledBuilder;
use crate::caption::derive_boolean_caption;
use crate::label::label_tag;

/// Options accepted by check box helpers.
#[derive(Debug, Clone)]
pub struct CheckBoxOptions {
    /// Explicit label caption; guessed from the name otherwise.
    pub label: Option<String>,
    /// Extra HTML attributes for the label tag.
    pub label_options: TagAttrs,
    /// HTML attributes for the input element.
    pub input: TagAttrs,
    /// Extra CSS classes for the container element.
    pub class: CssClassList,
    /// Pass-through attributes for the container element.
    pub attrs: TagAttrs,
    /// The value posted when the box is checked.
    pub checked_value: String,
}

impl Default for CheckBoxOptions {
    fn default() -> Self {
        Self {
            label: None,
            label_options: TagAttrs::new(),
            input: TagAttrs::new(),
            class: CssClassList::new(),
            attrs: TagAttrs::new(),
            checked_value: "1".to_string(),
        }
    }
}

impl CheckBoxOptions {
    /// Creates default check box options.
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

    /// Sets an HTML attribute on the input element.
    #[must_use]
    pub fn input_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.input.set(key, value);
        self
    }

    /// Appends container classes parsed from a space-separated string.
    #[must_use]
    pub fn class(mut self, input: &str) -> Self {
        self.class.extend_parse(input);
        self
    }

    /// Sets the checked value.
    #[must_use]
    pub fn checked_value(mut self, value: impl Into<String>) -> Self {
        self.checked_value = value.into();
        self
    }
}

/// Creates a labelled check box from a field name.
///
/// The label follows the input and links to the input's id (defaulting
/// to `name`); the caption is guessed from the id when not given. The
/// whole field is wrapped in a `boolean_field` div.
pub fn labelled_check_box_tag(
    name: &str,
    value: &str,
    checked: bool,
    options: CheckBoxOptions,
) -> String {
    let CheckBoxOptions {
        label,
        label_options,
        input,
        class,
        attrs,
        checked_value: _,
    } = options;

    let mut input_attrs = input;
    if !input_attrs.contains("id") {
        input_attrs.set("id", name);
    }
    input_attrs.set("name", name);
    input_attrs.set("type", "checkbox");
    input_attrs.set("value", value);
    if checked {
        input_attrs.set("checked", "checked");
    }

    let element_id = input_attrs.get("id").map(ToString::to_string);
    let check_box = tag("input", &input_attrs);
    let label_html = label_tag(element_id.as_deref(), label.as_deref(), &label_options);

    let mut classes = CssClassList::parse("boolean_field");
    classes.extend(&class);
    let mut container_attrs = attrs;
    container_attrs.set("class", classes.to_string());

    content_tag("div", &format!("{check_box}{label_html}"), &container_attrs)
}

impl<O: FormObject> LabelledBuilder<'_, O> {
    /// Creates a labelled check box for a bound attribute.
    ///
    /// The input id is `{object}_{attribute}`, the caption defaults to
    /// the humanized attribute name with a question mark, and the box
    /// is checked when the attribute's current value equals the checked
    /// value.
    pub fn check_box(&self, attribute: &str, mut options: CheckBoxOptions) -> String {
        let object_name = self.object().object_name();
        if !options.input.contains("id") {
            options.input.set("id", field_id(object_name, attribute));
        }
        if options.label.is_none() {
            options.label = Some(derive_boolean_caption(attribute));
        }

        let checked = self.object().attribute_value(attribute).as_deref()
            == Some(options.checked_value.as_str());
        let name = format!("{object_name}[{attribute}]");
        let value = options.checked_value.clone();
        labelled_check_box_tag(&name, &value, checked, options)
    }
}
