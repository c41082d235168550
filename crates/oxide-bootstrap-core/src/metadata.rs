//! Field metadata supplied by the host application.
//!
//! Input helpers never inspect model types themselves. Whatever owns the
//! form model (a validated struct, a form definition, a request) implements
//! [`FieldMetadataProvider`] and answers questions about a field by its id.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::style::ValidationState;

static INVALID_ID_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_-]").expect("valid id regex"));

/// Converts a field path into a value usable as an HTML `id`.
///
/// Every character outside `[A-Za-z0-9_-]` becomes `_`, so
/// `Person.Address[0].City` becomes `Person_Address_0__City`.
pub fn html_id(field: &str) -> String {
    INVALID_ID_CHARS.replace_all(field, "_").into_owned()
}

/// Derives a display name from the last segment of a field path.
fn fallback_display_name(field: &str) -> String {
    field
        .rsplit(['.', '[', ']'])
        .find(|s| !s.is_empty())
        .unwrap_or(field)
        .to_string()
}

/// Answers metadata questions about bound form fields.
pub trait FieldMetadataProvider {
    /// Returns whether the field must have a value.
    fn is_field_required(&self, field: &str) -> bool;

    /// Returns whether the field cannot be edited.
    fn is_field_read_only(&self, field: &str) -> bool;

    /// Returns the field's validation state.
    fn validation_state(&self, field: &str) -> ValidationState;

    /// Returns the human-readable label for the field.
    fn display_name(&self, field: &str) -> String;

    /// Returns whether the field holds an email address.
    fn is_email(&self, _field: &str) -> bool {
        false
    }

    /// Returns the current value of the field, if any.
    fn field_value(&self, _field: &str) -> Option<String> {
        None
    }

    /// Returns validation messages for the field.
    fn validation_messages(&self, _field: &str) -> Vec<String> {
        Vec::new()
    }
}

/// Metadata for a single field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMetadata {
    /// Label shown to the user. Derived from the field id when unset.
    pub display_name: Option<String>,
    pub required: bool,
    pub read_only: bool,
    pub email: bool,
    /// Submitted or initial value.
    pub value: Option<String>,
    /// Validation errors for this field.
    pub errors: Vec<String>,
    /// Whether the value came from a submission (drives `is-valid`).
    pub submitted: bool,
}

impl FieldMetadata {
    /// Creates empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the display name.
    #[must_use]
    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Marks the field as required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Marks the field as read-only.
    #[must_use]
    pub const fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Marks the field as an email address.
    #[must_use]
    pub const fn email(mut self) -> Self {
        self.email = true;
        self
    }

    /// Sets an initial value.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Records a submitted value.
    #[must_use]
    pub fn submitted(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self.submitted = true;
        self
    }

    /// Adds a validation error.
    #[must_use]
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.errors.push(message.into());
        self
    }

    /// Returns the validation state implied by this metadata.
    pub fn validation_state(&self) -> ValidationState {
        let attempted = if self.submitted {
            self.value.as_deref()
        } else {
            None
        };
        ValidationState::from_submission(self.errors.len(), attempted)
    }
}

/// In-memory [`FieldMetadataProvider`] keyed by field id.
///
/// Unknown fields are optional, editable, unvalidated, and labelled with the
/// last segment of their id.
#[derive(Debug, Clone, Default)]
pub struct FormMetadata {
    fields: HashMap<String, FieldMetadata>,
}

impl FormMetadata {
    /// Creates an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds metadata for a field.
    #[must_use]
    pub fn field(mut self, id: impl Into<String>, metadata: FieldMetadata) -> Self {
        self.fields.insert(id.into(), metadata);
        self
    }

    /// Adds a validation error to a field, creating it if needed.
    pub fn add_error(&mut self, id: &str, message: impl Into<String>) {
        self.fields
            .entry(id.to_string())
            .or_default()
            .errors
            .push(message.into());
    }

    /// Returns the metadata for a field.
    pub fn get(&self, id: &str) -> Option<&FieldMetadata> {
        self.fields.get(id)
    }

    /// Returns whether any field has errors.
    pub fn has_errors(&self) -> bool {
        self.fields.values().any(|f| !f.errors.is_empty())
    }
}

impl FieldMetadataProvider for FormMetadata {
    fn is_field_required(&self, field: &str) -> bool {
        self.get(field).is_some_and(|f| f.required)
    }

    fn is_field_read_only(&self, field: &str) -> bool {
        self.get(field).is_some_and(|f| f.read_only)
    }

    fn validation_state(&self, field: &str) -> ValidationState {
        self.get(field)
            .map(FieldMetadata::validation_state)
            .unwrap_or_default()
    }

    fn display_name(&self, field: &str) -> String {
        self.get(field)
            .and_then(|f| f.display_name.clone())
            .unwrap_or_else(|| fallback_display_name(field))
    }

    fn is_email(&self, field: &str) -> bool {
        self.get(field).is_some_and(|f| f.email)
    }

    fn field_value(&self, field: &str) -> Option<String> {
        self.get(field).and_then(|f| f.value.clone())
    }

    fn validation_messages(&self, field: &str) -> Vec<String> {
        self.get(field).map(|f| f.errors.clone()).unwrap_or_default()
    }
}
