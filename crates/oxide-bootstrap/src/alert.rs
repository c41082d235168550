//! Alert helper.

use ironhtml::typed::Element;
use ironhtml_elements::{Button, Div};
use oxide_bootstrap_core::{compose, StyleOptions, Variant};

/// Options for [`alert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertOptions {
    /// Color variant.
    pub variant: Variant,
    /// Whether to render a close button.
    pub dismissible: bool,
}

impl Default for AlertOptions {
    fn default() -> Self {
        Self {
            variant: Variant::Primary,
            dismissible: false,
        }
    }
}

impl AlertOptions {
    /// Creates options for the given variant.
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            ..Default::default()
        }
    }

    /// Makes the alert dismissible.
    #[must_use]
    pub const fn dismissible(mut self) -> Self {
        self.dismissible = true;
        self
    }
}

/// Renders a Bootstrap alert.
///
/// ```rust
/// use oxide_bootstrap::{alert, AlertOptions};
/// use oxide_bootstrap_core::Variant;
///
/// let html = alert("Saved.", &AlertOptions::new(Variant::Success));
/// assert!(html.contains(r#"class="alert alert-success""#));
/// ```
pub fn alert(message: &str, options: &AlertOptions) -> String {
    let mut style = StyleOptions::new().variant(options.variant);
    if options.dismissible {
        style = style.dismissible();
    }
    let class = compose(&style, "alert");

    Element::<Div>::new()
        .class(&class)
        .attr("role", "alert")
        .when(options.dismissible, |d| {
            d.child::<Button, _>(|b| {
                b.attr("type", "button")
                    .class("btn-close")
                    .attr("data-bs-dismiss", "alert")
                    .attr("aria-label", "Close")
            })
        })
        .text(message)
        .render()
}
