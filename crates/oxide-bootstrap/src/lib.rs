//! # oxide-bootstrap
//!
//! Bootstrap 5 HTML helpers for server-rendered pages.
//!
//! This crate provides:
//! - Alerts, buttons and breadcrumbs
//! - Pagination bars driven by [`oxide_bootstrap_core::plan`]
//! - Labelled form inputs with validation feedback
//! - CDN `<link>`/`<script>` tags
//! - JSON configuration for site-wide defaults
//!
//! Every helper returns a `String`. An empty string means there is nothing
//! to render.
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_bootstrap::{alert, breadcrumb, button, pagination, AlertOptions, ButtonOptions};
//! use oxide_bootstrap_core::{PaginationRequest, Size, Variant};
//!
//! let notice = alert(
//!     "Your changes were saved.",
//!     &AlertOptions::new(Variant::Success).dismissible(),
//! );
//! let trail = breadcrumb(&[("Home", "/"), ("Posts", "/posts")]);
//! let save = button("Save", &ButtonOptions::new().button_type("submit"));
//! let pages = pagination(
//!     &PaginationRequest::new(3, 12),
//!     Size::Default,
//!     |page| format!("/posts?page={page}"),
//! );
//!
//! assert!(notice.contains("alert-dismissible"));
//! assert!(trail.contains("breadcrumb-item active"));
//! assert!(save.contains(r#"type="submit""#));
//! assert!(pages.contains("page-item active"));
//! ```
//!
//! ## Form Inputs
//!
//! Field details come from a [`FieldMetadataProvider`]. [`FormMetadata`] is
//! an in-memory implementation; applications can implement the trait on
//! their own form types.
//!
//! ```rust
//! use oxide_bootstrap::{input_for, InputOptions};
//! use oxide_bootstrap_core::{FieldMetadata, FormMetadata, Margin};
//!
//! let meta = FormMetadata::new().field(
//!     "FavouriteColor",
//!     FieldMetadata::new()
//!         .display_name("Favourite color")
//!         .required()
//!         .error("Please select a favourite color"),
//! );
//! let html = input_for(
//!     &meta,
//!     "FavouriteColor",
//!     &InputOptions::new().margin_bottom(Margin::M3),
//! );
//! assert!(html.contains("is-invalid"));
//! assert!(html.contains("invalid-feedback"));
//! ```
//!
//! [`FieldMetadataProvider`]: oxide_bootstrap_core::FieldMetadataProvider
//! [`FormMetadata`]: oxide_bootstrap_core::FormMetadata

mod alert;
mod attrs;
mod breadcrumb;
mod button;
pub mod cdn;
pub mod config;
mod error;
mod input;
mod pagination;

pub use alert::{alert, AlertOptions};
pub use attrs::HtmlAttrs;
pub use breadcrumb::breadcrumb;
pub use button::{button, ButtonOptions};
pub use cdn::{bundle_script, cdn_scripts, cdn_styles, stylesheet_link, CdnConfig};
pub use config::{BootstrapConfig, PaginationDefaults};
pub use error::{BootstrapError, Result};
pub use input::{input_for, InputOptions};
pub use pagination::pagination;
