//! Form input helper with label and validation feedback.

use ironhtml::typed::Element;
use ironhtml_elements::{Div, Input, Label, Span, Textarea};
use oxide_bootstrap_core::{html_id, ClassList, FieldMetadataProvider, Margin, Size};
use tracing::trace;

use crate::attrs::HtmlAttrs;

/// Options for [`input_for`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputOptions {
    /// The input `type`, or `textarea` for a multi-line field.
    pub input_type: String,
    /// Placeholder text.
    pub placeholder: String,
    /// Control size.
    pub size: Size,
    /// Bottom margin on the wrapper.
    pub margin_bottom: Option<Margin>,
    /// Extra attributes on the control. These override the defaults.
    pub attrs: HtmlAttrs,
    /// Whether to mark required fields with an asterisk.
    pub add_required_asterisk: bool,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            input_type: "text".to_string(),
            placeholder: String::new(),
            size: Size::Default,
            margin_bottom: None,
            attrs: HtmlAttrs::new(),
            add_required_asterisk: true,
        }
    }
}

impl InputOptions {
    /// Creates default options for a text input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for a textarea.
    pub fn textarea() -> Self {
        Self {
            input_type: "textarea".to_string(),
            ..Default::default()
        }
    }

    /// Sets the input type.
    #[must_use]
    pub fn input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = input_type.into();
        self
    }

    /// Sets the placeholder.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Sets the control size.
    #[must_use]
    pub const fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Sets the wrapper's bottom margin.
    #[must_use]
    pub const fn margin_bottom(mut self, margin: Margin) -> Self {
        self.margin_bottom = Some(margin);
        self
    }

    /// Sets an extra attribute on the control.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }

    /// Disables the required asterisk.
    #[must_use]
    pub const fn no_asterisk(mut self) -> Self {
        self.add_required_asterisk = false;
        self
    }

    fn is_textarea(&self) -> bool {
        self.input_type.eq_ignore_ascii_case("textarea")
    }
}

/// Builds the attribute list for the control, in render order.
fn control_attrs<P>(provider: &P, field: &str, options: &InputOptions) -> HtmlAttrs
where
    P: FieldMetadataProvider + ?Sized,
{
    let mut class = ClassList::new("form-control");
    if let Some(modifier) = options.size.modifier("form-control") {
        class.push(&modifier);
    }
    if let Some(feedback) = provider.validation_state(field).class() {
        class.push(feedback);
    }
    if let Some(extra) = options.attrs.get("class") {
        class.push(extra);
    }

    let mut attrs = HtmlAttrs::new()
        .with("id", html_id(field))
        .with("name", field)
        .with("placeholder", options.placeholder.as_str())
        .with("class", class.to_string());

    if !options.is_textarea() {
        let input_type = if provider.is_email(field) {
            "email"
        } else {
            options.input_type.as_str()
        };
        attrs.set("type", input_type);
        if let Some(value) = provider.field_value(field) {
            attrs.set("value", value);
        }
    }
    if provider.is_field_required(field) {
        attrs.set("required", "required");
    }
    if provider.is_field_read_only(field) {
        attrs.set("readonly", "readonly");
    }

    for (k, v) in options.attrs.without_class() {
        attrs.set(k, v);
    }
    attrs
}

/// Renders a labelled Bootstrap form control for a bound field.
///
/// Required, read-only, email and validation details come from `provider`.
/// The wrapper holds the label, the control, and one `invalid-feedback`
/// block per validation message.
///
/// ```rust
/// use oxide_bootstrap::{input_for, InputOptions};
/// use oxide_bootstrap_core::{FieldMetadata, FormMetadata, Margin};
///
/// let meta = FormMetadata::new().field(
///     "Email",
///     FieldMetadata::new().required().email(),
/// );
/// let html = input_for(&meta, "Email", &InputOptions::new().margin_bottom(Margin::M3));
/// assert!(html.contains(r#"type="email""#));
/// assert!(html.contains("(*)"));
/// ```
pub fn input_for<P>(provider: &P, field: &str, options: &InputOptions) -> String
where
    P: FieldMetadataProvider + ?Sized,
{
    let id = html_id(field);
    let display_name = provider.display_name(field);
    let show_asterisk = options.add_required_asterisk && provider.is_field_required(field);
    let attrs = control_attrs(provider, field, options);
    let messages = provider.validation_messages(field);
    trace!(field, id = %id, "rendering input");

    let control = if options.is_textarea() {
        let mut t = Element::<Textarea>::new();
        for (k, v) in attrs.iter() {
            t = t.attr(k.to_string(), v);
        }
        t.text(&provider.field_value(field).unwrap_or_default())
            .render()
    } else {
        let mut i = Element::<Input>::new();
        for (k, v) in attrs.iter() {
            i = i.attr(k.to_string(), v);
        }
        i.render()
    };

    let wrapper = match options.margin_bottom {
        Some(margin) => Element::<Div>::new().class(&margin.bottom_class()),
        None => Element::<Div>::new(),
    };

    wrapper
        .child::<Label, _>(|l| {
            l.attr("for", &id)
                .class("form-label")
                .text(&display_name)
                .when(show_asterisk, |l| {
                    l.text(" ")
                        .child::<Span, _>(|s| s.class("text-danger").text("(*)"))
                })
        })
        .raw(&control)
        .children(messages.iter(), |msg, d: Element<Div>| {
            d.class("invalid-feedback").text(msg)
        })
        .render()
}
