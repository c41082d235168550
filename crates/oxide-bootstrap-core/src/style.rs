//! Bootstrap style enums and their class tokens.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StyleError;

/// Bootstrap color variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
    Light,
    Dark,
}

impl Variant {
    /// All variants, in Bootstrap's documentation order.
    pub const ALL: [Self; 8] = [
        Self::Primary,
        Self::Secondary,
        Self::Success,
        Self::Danger,
        Self::Warning,
        Self::Info,
        Self::Light,
        Self::Dark,
    ];

    /// Returns the class suffix for this variant.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Variant {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|v| v.token() == lower)
            .ok_or_else(|| StyleError::UnknownVariant(s.to_string()))
    }
}

/// Bootstrap sizing modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    #[default]
    Default,
    Small,
    Large,
}

impl Size {
    /// Returns the class suffix, or `None` for the default size.
    pub const fn token(self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Small => Some("sm"),
            Self::Large => Some("lg"),
        }
    }

    /// Returns the `{base}-{sm|lg}` class for a non-default size.
    pub fn modifier(self, base: &str) -> Option<String> {
        self.token().map(|t| format!("{base}-{t}"))
    }
}

impl FromStr for Size {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "default" => Ok(Self::Default),
            "sm" | "small" => Ok(Self::Small),
            "lg" | "large" => Ok(Self::Large),
            _ => Err(StyleError::UnknownSize(s.to_string())),
        }
    }
}

/// Bootstrap spacing value for the `mb-*` utility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Margin {
    #[serde(rename = "0")]
    M0,
    #[serde(rename = "1")]
    M1,
    #[serde(rename = "2")]
    M2,
    #[serde(rename = "3")]
    M3,
    #[serde(rename = "4")]
    M4,
    #[serde(rename = "5")]
    M5,
    #[serde(rename = "auto")]
    Auto,
}

impl Margin {
    /// Returns the spacing token (`0`..`5` or `auto`).
    pub const fn token(self) -> &'static str {
        match self {
            Self::M0 => "0",
            Self::M1 => "1",
            Self::M2 => "2",
            Self::M3 => "3",
            Self::M4 => "4",
            Self::M5 => "5",
            Self::Auto => "auto",
        }
    }

    /// Returns the bottom-margin utility class, e.g. `mb-3`.
    pub fn bottom_class(self) -> String {
        format!("mb-{}", self.token())
    }
}

impl fmt::Display for Margin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Margin {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "0" => Ok(Self::M0),
            "1" => Ok(Self::M1),
            "2" => Ok(Self::M2),
            "3" => Ok(Self::M3),
            "4" => Ok(Self::M4),
            "5" => Ok(Self::M5),
            "auto" => Ok(Self::Auto),
            _ => Err(StyleError::UnknownMargin(s.to_string())),
        }
    }
}

/// Validation state of a bound form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationState {
    #[default]
    None,
    Valid,
    Invalid,
}

impl ValidationState {
    /// Derives the state from a submitted field.
    ///
    /// Any error makes the field invalid. Without errors, a field whose value
    /// was actually submitted is valid; an untouched field has no state.
    pub const fn from_submission(error_count: usize, attempted_value: Option<&str>) -> Self {
        if error_count > 0 {
            Self::Invalid
        } else if attempted_value.is_some() {
            Self::Valid
        } else {
            Self::None
        }
    }

    /// Returns the Bootstrap feedback class, if any.
    pub const fn class(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Valid => Some("is-valid"),
            Self::Invalid => Some("is-invalid"),
        }
    }
}

impl FromStr for ValidationState {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" => Ok(Self::None),
            "valid" => Ok(Self::Valid),
            "invalid" => Ok(Self::Invalid),
            _ => Err(StyleError::UnknownValidationState(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_parse() {
        assert_eq!("Danger".parse::<Variant>(), Ok(Variant::Danger));
        assert_eq!(" info ".parse::<Variant>(), Ok(Variant::Info));
        assert_eq!(
            "purple".parse::<Variant>(),
            Err(StyleError::UnknownVariant("purple".to_string()))
        );
    }

    #[test]
    fn test_size_tokens() {
        assert_eq!(Size::Default.token(), None);
        assert_eq!(Size::Small.modifier("btn").as_deref(), Some("btn-sm"));
        assert_eq!(Size::Large.modifier("pagination").as_deref(), Some("pagination-lg"));
        assert_eq!("lg".parse::<Size>(), Ok(Size::Large));
    }

    #[test]
    fn test_margin_tokens() {
        assert_eq!(Margin::M3.bottom_class(), "mb-3");
        assert_eq!(Margin::Auto.bottom_class(), "mb-auto");
        assert_eq!("auto".parse::<Margin>(), Ok(Margin::Auto));
        assert!("6".parse::<Margin>().is_err());
    }

    #[test]
    fn test_validation_from_submission() {
        assert_eq!(
            ValidationState::from_submission(2, Some("x")),
            ValidationState::Invalid
        );
        assert_eq!(
            ValidationState::from_submission(0, Some("")),
            ValidationState::Valid
        );
        assert_eq!(
            ValidationState::from_submission(0, None),
            ValidationState::None
        );
    }

    #[test]
    fn test_serde_tokens() {
        let v: Variant = serde_json::from_str(r#""warning""#).unwrap();
        assert_eq!(v, Variant::Warning);
        let m: Margin = serde_json::from_str(r#""4""#).unwrap();
        assert_eq!(m, Margin::M4);
        assert_eq!(serde_json::to_string(&Size::Small).unwrap(), r#""small""#);
    }
}
