//! Bootstrap CDN tags.

use ironhtml::typed::Element;
use ironhtml_elements::{Link, Script};
use serde::{Deserialize, Serialize};

/// Where to load Bootstrap's stylesheet and script bundle from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CdnConfig {
    /// Stylesheet URL.
    pub css_url: String,
    /// Subresource integrity hash for the stylesheet.
    pub css_integrity: Option<String>,
    /// Script bundle URL.
    pub js_url: String,
    /// Subresource integrity hash for the script bundle.
    pub js_integrity: Option<String>,
    /// Value of the `crossorigin` attribute.
    pub crossorigin: String,
}

impl Default for CdnConfig {
    fn default() -> Self {
        Self {
            css_url: "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css"
                .to_string(),
            css_integrity: Some(
                "sha384-QWTKZyjpPEjISv5WaRU9OFeRpok6YctnYmDr5pNlyT2bRjXh0JMhjY6hW+ALEwIH"
                    .to_string(),
            ),
            js_url: "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/js/bootstrap.bundle.min.js"
                .to_string(),
            js_integrity: Some(
                "sha384-YvpcrYf0tY3lHB60NNkmXc5s9fDVZLESaAA55NDzOxhy9GkcIdslK1eN7N6jIeHz"
                    .to_string(),
            ),
            crossorigin: "anonymous".to_string(),
        }
    }
}

/// Sets the stylesheet attributes on a `<link>` element.
///
/// Use this when building a typed `<head>`; [`cdn_styles`] renders the same
/// element on its own.
pub fn stylesheet_link(link: Element<Link>, config: &CdnConfig) -> Element<Link> {
    let link = link.attr("rel", "stylesheet").attr("href", &config.css_url);
    match &config.css_integrity {
        Some(hash) => link
            .attr("integrity", hash)
            .attr("crossorigin", &config.crossorigin),
        None => link,
    }
}

/// Sets the bundle attributes on a `<script>` element.
pub fn bundle_script(script: Element<Script>, config: &CdnConfig) -> Element<Script> {
    let script = script.attr("src", &config.js_url);
    match &config.js_integrity {
        Some(hash) => script
            .attr("integrity", hash)
            .attr("crossorigin", &config.crossorigin),
        None => script,
    }
}

/// Renders the `<link>` tag for Bootstrap's stylesheet.
pub fn cdn_styles(config: &CdnConfig) -> String {
    stylesheet_link(Element::<Link>::new(), config).render()
}

/// Renders the `<script>` tag for Bootstrap's JavaScript bundle.
pub fn cdn_scripts(config: &CdnConfig) -> String {
    bundle_script(Element::<Script>::new(), config).render()
}
