//! Label tag generation.

use labelled_markup::{content_tag, escape, TagAttrs};
use labelled_model::field_id;

use crate::caption::derive_caption;

/// Creates a label tag linked to `element_id`.
///
/// When `caption` is absent the contents are guessed from the element
/// id (`"var_name"` becomes `"Var name:"`). When `element_id` is absent
/// the `for` attribute is omitted; an explicit `for` in `attrs` is
/// never overwritten.
pub fn label_tag(element_id: Option<&str>, caption: Option<&str>, attrs: &TagAttrs) -> String {
    let caption = caption.map_or_else(
        || derive_caption(element_id.unwrap_or_default()),
        ToString::to_string,
    );

    let mut attrs = attrs.clone();
    if let Some(id) = element_id {
        if !attrs.contains("for") {
            attrs.set("for", id);
        }
    }

    content_tag("label", &escape(&caption), &attrs)
}

/// Creates a label tag for a bound attribute.
///
/// The `for` attribute always targets `{object_name}_{attribute}` and
/// the caption defaults to the humanized attribute name.
pub fn label(
    object_name: &str,
    attribute: &str,
    caption: Option<&str>,
    attrs: &TagAttrs,
) -> String {
    let caption = caption.map_or_else(|| derive_caption(attribute), ToString::to_string);

    let mut attrs = attrs.clone();
    attrs.set("for", field_id(object_name, attribute));

    content_tag("label", &escape(&caption), &attrs)
}
