//! # oxide-bootstrap-core
//!
//! Framework-independent building blocks for Bootstrap 5 markup.
//!
//! This crate provides:
//! - Style enums (`Variant`, `Size`, `Margin`, `ValidationState`)
//! - CSS class composition from `StyleOptions`
//! - Pagination window planning
//! - The `FieldMetadataProvider` trait used by form input helpers
//!
//! Everything here is pure: no I/O, no shared state.
//!
//! ## Class Composition
//!
//! ```rust
//! use oxide_bootstrap_core::{compose, Margin, StyleOptions, Variant};
//!
//! let opts = StyleOptions::new()
//!     .variant(Variant::Success)
//!     .dismissible()
//!     .margin(Margin::M3);
//! assert_eq!(
//!     compose(&opts, "alert"),
//!     "alert alert-success alert-dismissible mb-3",
//! );
//! ```
//!
//! ## Pagination
//!
//! ```rust
//! use oxide_bootstrap_core::{plan, PaginationRequest};
//!
//! let req = PaginationRequest::new(1, 3);
//! let links = plan(&req);
//!
//! // first, previous, 1, 2, 3, next, last
//! assert_eq!(links.len(), 7);
//! assert!(!links[0].enabled);
//! assert_eq!(links[5].href(|p| format!("/posts?page={p}")), "/posts?page=2");
//! ```
//!
//! ## Field Metadata
//!
//! ```rust
//! use oxide_bootstrap_core::{FieldMetadata, FieldMetadataProvider, FormMetadata};
//!
//! let meta = FormMetadata::new().field(
//!     "Email",
//!     FieldMetadata::new().display_name("Email address").required().email(),
//! );
//! assert!(meta.is_field_required("Email"));
//! assert_eq!(meta.display_name("Email"), "Email address");
//! ```

mod classes;
mod error;
pub mod metadata;
pub mod pagination;
pub mod style;

pub use classes::{compose, ClassList, StyleOptions};
pub use error::{Result, StyleError};
pub use metadata::{html_id, FieldMetadata, FieldMetadataProvider, FormMetadata};
pub use pagination::{
    plan, visible_window, PageLinkDescriptor, PageLinkKind, PaginationLabels, PaginationRequest,
};
pub use style::{Margin, Size, ValidationState, Variant};
