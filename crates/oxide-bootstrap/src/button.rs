//! Button helper.

use ironhtml::typed::Element;
use ironhtml_elements::{Button, A};
use oxide_bootstrap_core::{compose, ClassList, Size, StyleOptions, Variant};
use tracing::trace;

use crate::attrs::HtmlAttrs;

/// Options for [`button`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonOptions {
    /// Variant, outline and size. Other style fields are honoured too.
    pub style: StyleOptions,
    /// The `type` attribute for `<button>` elements.
    pub button_type: String,
    /// When set and non-empty, renders an `<a>` link instead of a button.
    pub href: Option<String>,
    /// Extra attributes. A `class` value is appended to the composed classes.
    pub attrs: HtmlAttrs,
}

impl Default for ButtonOptions {
    fn default() -> Self {
        Self {
            style: StyleOptions::default(),
            button_type: "button".to_string(),
            href: None,
            attrs: HtmlAttrs::new(),
        }
    }
}

impl ButtonOptions {
    /// Creates default options (primary, `type="button"`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the solid variant.
    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.style = self.style.variant(variant);
        self
    }

    /// Sets the outline variant.
    #[must_use]
    pub fn outline(mut self, variant: Variant) -> Self {
        self.style = self.style.outline(variant);
        self
    }

    /// Sets the size.
    #[must_use]
    pub fn size(mut self, size: Size) -> Self {
        self.style = self.style.size(size);
        self
    }

    /// Sets the button type (`button`, `submit`, `reset`).
    #[must_use]
    pub fn button_type(mut self, button_type: impl Into<String>) -> Self {
        self.button_type = button_type.into();
        self
    }

    /// Renders the button as a link to `href`.
    #[must_use]
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    /// Sets an extra attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }
}

/// Renders a Bootstrap button, or a link styled as one.
///
/// ```rust
/// use oxide_bootstrap::{button, ButtonOptions};
/// use oxide_bootstrap_core::{Size, Variant};
///
/// let html = button(
///     "Delete",
///     &ButtonOptions::new().variant(Variant::Danger).size(Size::Small),
/// );
/// assert!(html.contains(r#"class="btn btn-danger btn-sm""#));
/// assert!(html.contains(r#"type="button""#));
/// ```
pub fn button(text: &str, options: &ButtonOptions) -> String {
    let mut classes = ClassList::new(&compose(&options.style, "btn"));
    if let Some(extra) = options.attrs.get("class") {
        classes.push(extra);
    }
    let class = classes.to_string();

    match options.href.as_deref().filter(|h| !h.is_empty()) {
        Some(href) => {
            trace!(href, "rendering link button");
            let mut a = Element::<A>::new().attr("href", href).class(&class);
            for (k, v) in options.attrs.without_class() {
                a = a.attr(k.to_string(), v);
            }
            a.text(text).render()
        }
        None => {
            let mut b = Element::<Button>::new()
                .attr("type", &options.button_type)
                .class(&class);
            for (k, v) in options.attrs.without_class() {
                b = b.attr(k.to_string(), v);
            }
            b.text(text).render()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_button() {
        let html = button("Save", &ButtonOptions::new());
        assert!(html.starts_with("<button"));
        assert!(html.contains(r#"class="btn btn-primary""#));
        assert!(html.contains(r#"type="button""#));
        assert!(html.contains("Save"));
    }

    #[test]
    fn test_outline_submit() {
        let opts = ButtonOptions::new()
            .outline(Variant::Secondary)
            .button_type("submit");
        let html = button("Go", &opts);
        assert!(html.contains(r#"class="btn btn-outline-secondary""#));
        assert!(html.contains(r#"type="submit""#));
    }

    #[test]
    fn test_link_button() {
        let opts = ButtonOptions::new().variant(Variant::Info).href("/docs");
        let html = button("Docs", &opts);
        assert!(html.starts_with("<a"));
        assert!(html.contains(r#"href="/docs""#));
        assert!(!html.contains("type="));
    }

    #[test]
    fn test_empty_href_renders_button() {
        let html = button("Plain", &ButtonOptions::new().href(""));
        assert!(html.starts_with("<button"));
    }

    #[test]
    fn test_extra_attrs() {
        let opts = ButtonOptions::new()
            .attr("class", "w-100")
            .attr("data-bs-toggle", "modal");
        let html = button("Open", &opts);
        assert!(html.contains(r#"class="btn btn-primary w-100""#));
        assert!(html.contains(r#"data-bs-toggle="modal""#));
    }

    #[test]
    fn test_runtime_attr_names() {
        let mut opts = ButtonOptions::new().href("/rows/7");
        for (name, value) in [("row", "7"), ("action", "edit")] {
            opts = opts.attr(format!("data-{name}"), value);
        }
        let html = button("Edit", &opts);
        assert!(html.contains(r#"data-row="7""#));
        assert!(html.contains(r#"data-action="edit""#));

        let html = button("Edit", &opts.href(""));
        assert!(html.starts_with("<button"));
        assert!(html.contains(r#"data-row="7""#));
    }
}
