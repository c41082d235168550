//! CSS class composition.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::style::{Margin, Size, ValidationState, Variant};

/// Semantic style options for a Bootstrap component.
///
/// Built fresh for each render call. Unset options contribute no classes,
/// except the variant, which falls back to `primary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleOptions {
    /// Solid color variant.
    pub variant: Option<Variant>,
    /// Outline color variant, used only when `variant` is unset.
    pub outline_variant: Option<Variant>,
    /// Size modifier.
    pub size: Size,
    /// Bottom margin utility.
    pub margin: Option<Margin>,
    /// Whether the component can be dismissed.
    pub dismissible: bool,
    /// Validation feedback state.
    pub validation_state: Option<ValidationState>,
}

impl StyleOptions {
    /// Creates options with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the solid variant.
    #[must_use]
    pub const fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Sets the outline variant.
    #[must_use]
    pub const fn outline(mut self, variant: Variant) -> Self {
        self.outline_variant = Some(variant);
        self
    }

    /// Sets the size.
    #[must_use]
    pub const fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Sets the bottom margin.
    #[must_use]
    pub const fn margin(mut self, margin: Margin) -> Self {
        self.margin = Some(margin);
        self
    }

    /// Makes the component dismissible.
    #[must_use]
    pub const fn dismissible(mut self) -> Self {
        self.dismissible = true;
        self
    }

    /// Sets the validation state.
    #[must_use]
    pub const fn validation(mut self, state: ValidationState) -> Self {
        self.validation_state = Some(state);
        self
    }
}

/// An ordered list of CSS class tokens without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    /// Creates a list starting with `base`.
    pub fn new(base: &str) -> Self {
        let mut list = Self::default();
        list.push(base);
        list
    }

    /// Appends one or more whitespace-separated tokens, skipping duplicates.
    pub fn push(&mut self, tokens: &str) -> &mut Self {
        for token in tokens.split_whitespace() {
            if !self.contains(token) {
                self.tokens.push(token.to_string());
            }
        }
        self
    }

    /// Appends `tokens` when `cond` holds.
    pub fn push_if(&mut self, cond: bool, tokens: &str) -> &mut Self {
        if cond {
            self.push(tokens);
        }
        self
    }

    /// Appends every token yielded by `tokens`.
    pub fn extend<I, S>(&mut self, tokens: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for t in tokens {
            self.push(t.as_ref());
        }
        self
    }

    /// Returns whether `token` is present.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Iterates over the tokens in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Returns whether the list has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}

/// Builds the class string for a component with the given base class.
///
/// Order: base, variant (or outline, or `primary`), size, dismissible,
/// margin, validation.
///
/// # Example
///
/// ```rust
/// use oxide_bootstrap_core::{compose, Size, StyleOptions, Variant};
///
/// let opts = StyleOptions::new().variant(Variant::Danger).size(Size::Small);
/// assert_eq!(compose(&opts, "btn"), "btn btn-danger btn-sm");
/// ```
pub fn compose(options: &StyleOptions, base_class: &str) -> String {
    let mut classes = ClassList::new(base_class);

    let color = match (options.variant, options.outline_variant) {
        (Some(v), _) => format!("{base_class}-{v}"),
        (None, Some(v)) => format!("{base_class}-outline-{v}"),
        (None, None) => format!("{base_class}-{}", Variant::Primary),
    };
    classes.push(&color);

    if let Some(size) = options.size.modifier(base_class) {
        classes.push(&size);
    }
    classes.push_if(options.dismissible, &format!("{base_class}-dismissible"));
    if let Some(margin) = options.margin {
        classes.push(&margin.bottom_class());
    }
    if let Some(class) = options.validation_state.and_then(ValidationState::class) {
        classes.push(class);
    }

    classes.to_string()
}
