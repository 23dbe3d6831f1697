//! Form sections.
//!
//! A section groups related fields under an optional title and info
//! block:
//!
//! ```text
//! <div class="section">
//!   <div class="section_info"><h2>Title</h2>INFO</div>
//!   <div class="section_body">BODY</div>
//! </div>
//! ```
//!
//! Info and body divs are omitted when not supplied; the title rides
//! inside the info div.

use labelled_markup::{content_tag, escape, tag, CssClassList, TagAttrs};

/// Options accepted by section helpers.
#[derive(Debug, Clone, Default)]
pub struct SectionOptions {
    /// The section title, shown as an `h2` inside the info block.
    pub title: Option<String>,
    /// Extra CSS classes for the section container.
    pub class: CssClassList,
    /// Pass-through attributes for the section container.
    pub attrs: TagAttrs,
}

impl SectionOptions {
    /// Creates empty section options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the section title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Appends container classes parsed from a space-separated string.
    #[must_use]
    pub fn class(mut self, input: &str) -> Self {
        self.class.extend_parse(input);
        self
    }

    /// Sets a pass-through attribute on the section container.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }
}

/// Collects the info and body blocks of a section under construction.
#[derive(Debug, Default)]
pub struct SectionBuilder {
    title: Option<String>,
    info: Option<String>,
    body: Option<String>,
}

impl SectionBuilder {
    fn new(title: Option<String>) -> Self {
        Self {
            title,
            info: None,
            body: None,
        }
    }

    /// Sets the info block from literal markup.
    pub fn info(&mut self, markup: impl Into<String>) {
        self.info = Some(markup.into());
    }

    /// Renders the info block through a callback.
    pub fn info_with(&mut self, render: impl FnOnce(&mut String)) {
        let mut markup = String::new();
        render(&mut markup);
        self.info = Some(markup);
    }

    /// Sets the body block from literal markup.
    pub fn body(&mut self, markup: impl Into<String>) {
        self.body = Some(markup.into());
    }

    /// Renders the body block through a callback.
    pub fn body_with(&mut self, render: impl FnOnce(&mut String)) {
        let mut markup = String::new();
        render(&mut markup);
        self.body = Some(markup);
    }

    fn output(&self) -> String {
        let mut result = String::new();

        if let Some(info) = &self.info {
            let mut inner = String::new();
            if let Some(title) = &self.title {
                inner.push_str(&content_tag("h2", &escape(title), &TagAttrs::new()));
            }
            inner.push_str(info);
            result.push_str(&content_tag(
                "div",
                &inner,
                &TagAttrs::new().with("class", "section_info"),
            ));
        }

        if let Some(body) = &self.body {
            result.push_str(&content_tag(
                "div",
                body,
                &TagAttrs::new().with("class", "section_body"),
            ));
        }

        result
    }
}

/// Creates a form section configured by the callback.
pub fn form_section(options: SectionOptions, configure: impl FnOnce(&mut SectionBuilder)) -> String {
    let mut out = String::new();
    write_form_section(&mut out, options, configure);
    out
}

/// Streaming variant of [`form_section`].
pub fn write_form_section(
    out: &mut String,
    options: SectionOptions,
    configure: impl FnOnce(&mut SectionBuilder),
) {
    let SectionOptions { title, class, attrs } = options;

    let mut builder = SectionBuilder::new(title);
    configure(&mut builder);

    let mut classes = CssClassList::parse("section");
    classes.extend(&class);
    let mut container_attrs = attrs;
    container_attrs.set("class", classes.to_string());

    out.push_str(&tag("div", &container_attrs));
    out.push_str(&builder.output());
    out.push_str("</div>");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_section() {
        let html = form_section(SectionOptions::new().title("Login"), |section| {
            section.info("Please enter your credentials.");
            section.body("<p>fields</p>");
        });
        assert_eq!(
            html,
            concat!(
                r#"<div class="section">"#,
                r#"<div class="section_info"><h2>Login</h2>Please enter your credentials.</div>"#,
                r#"<div class="section_body"><p>fields</p></div>"#,
                "</div>"
            )
        );
    }

    #[test]
    fn test_body_only() {
        let html = form_section(SectionOptions::new(), |section| {
            section.body("<p>fields</p>");
        });
        assert_eq!(
            html,
            r#"<div class="section"><div class="section_body"><p>fields</p></div></div>"#
        );
    }

    #[test]
    fn test_info_without_title() {
        let html = form_section(SectionOptions::new(), |section| {
            section.info("note");
        });
        assert!(html.contains(r#"<div class="section_info">note</div>"#));
        assert!(!html.contains("<h2>"));
    }

    #[test]
    fn test_empty_section() {
        let html = form_section(SectionOptions::new(), |_| {});
        assert_eq!(html, r#"<div class="section"></div>"#);
    }

    #[test]
    fn test_extra_class_and_attrs() {
        let html = form_section(
            SectionOptions::new().class("wide").attr("id", "login_section"),
            |section| {
                section.body("x");
            },
        );
        assert!(html.starts_with(r#"<div class="section wide" id="login_section">"#));
    }

    #[test]
    fn test_callback_blocks() {
        let html = form_section(SectionOptions::new().title("Login"), |section| {
            section.info_with(|out| out.push_str("note"));
            section.body_with(|out| out.push_str("fields"));
        });
        assert!(html.contains("<h2>Login</h2>note"));
        assert!(html.contains(r#"<div class="section_body">fields</div>"#));
    }

    #[test]
    fn test_title_is_escaped() {
        let html = form_section(SectionOptions::new().title("A & B"), |section| {
            section.info("x");
        });
        assert!(html.contains("<h2>A &amp; B</h2>"));
    }
}
