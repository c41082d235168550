//! The pattern library page.

use ironhtml::typed::{Document, Element};
use ironhtml_elements::{
    Body, Div, Form, Head, Html, Link, Main, Meta, Script, Section, Title, H1, H2,
};
use oxide_bootstrap::{
    alert, breadcrumb, bundle_script, button, input_for, pagination, stylesheet_link,
    AlertOptions, BootstrapConfig, ButtonOptions, InputOptions,
};
use oxide_bootstrap_core::{FieldMetadata, FormMetadata, Margin, Size, Variant};
use tracing::debug;

/// What the gallery should show.
#[derive(Debug, Clone)]
pub struct GalleryContext {
    /// Site configuration.
    pub config: BootstrapConfig,
    /// Current page of the pagination demo.
    pub page: usize,
    /// Total pages of the pagination demo.
    pub total_pages: usize,
    /// Whether to render the sample form as if it failed validation.
    pub show_errors: bool,
}

/// Metadata for the sample form.
pub fn sample_form(show_errors: bool) -> FormMetadata {
    let mut favourite = FieldMetadata::new()
        .display_name("Favourite color")
        .required();
    if show_errors {
        favourite = favourite.error("Please select a favourite color");
    }

    let email = if show_errors {
        FieldMetadata::new().email().submitted("ada@example.com")
    } else {
        FieldMetadata::new().email()
    };

    FormMetadata::new()
        .field("Name", FieldMetadata::new())
        .field("FavouriteColor", favourite)
        .field("Email", email)
        .field("Description", FieldMetadata::new())
}

fn section(title: &str, body: &str) -> String {
    Element::<Section>::new()
        .class("mb-5")
        .child::<H2, _>(|h| h.class("h4 mb-3").text(title))
        .child::<Div, _>(|d| d.raw(body))
        .render()
}

fn alerts_section() -> String {
    let mut html = String::new();
    for variant in Variant::ALL {
        let message = format!("A simple {variant} alert.");
        html.push_str(&alert(&message, &AlertOptions::new(variant)));
    }
    html.push_str(&alert(
        "This alert can be dismissed.",
        &AlertOptions::new(Variant::Warning).dismissible(),
    ));
    section("Alerts", &html)
}

fn buttons_section() -> String {
    let mut solid = String::new();
    let mut outline = String::new();
    for variant in Variant::ALL {
        let label = variant.to_string();
        solid.push_str(&button(
            &label,
            &ButtonOptions::new().variant(variant).attr("class", "me-1 mb-1"),
        ));
        outline.push_str(&button(
            &label,
            &ButtonOptions::new().outline(variant).attr("class", "me-1 mb-1"),
        ));
    }

    let sizes = [
        button("Small", &ButtonOptions::new().size(Size::Small).attr("class", "me-1")),
        button("Default", &ButtonOptions::new().attr("class", "me-1")),
        button("Large", &ButtonOptions::new().size(Size::Large).attr("class", "me-1")),
        button(
            "Link",
            &ButtonOptions::new()
                .variant(Variant::Secondary)
                .href("https://getbootstrap.com/"),
        ),
    ]
    .concat();

    let body = Element::<Div>::new()
        .child::<Div, _>(|d| d.class("mb-2").raw(&solid))
        .child::<Div, _>(|d| d.class("mb-2").raw(&outline))
        .child::<Div, _>(|d| d.raw(&sizes))
        .render();
    section("Buttons", &body)
}

fn navigation_section(ctx: &GalleryContext) -> String {
    let trail = breadcrumb(&[
        ("Home", "/"),
        ("Products", "/products"),
        ("Laptops", "/products/laptops"),
    ]);
    let defaults = &ctx.config.pagination;
    let pages = pagination(
        &defaults.request(ctx.page, ctx.total_pages),
        defaults.size,
        |page| format!("?page={page}"),
    );
    section("Navigation", &format!("{trail}{pages}"))
}

fn form_section(ctx: &GalleryContext) -> String {
    let meta = sample_form(ctx.show_errors);
    let fields = [
        input_for(
            &meta,
            "Name",
            &InputOptions::new()
                .placeholder("Ada Lovelace")
                .margin_bottom(Margin::M3),
        ),
        input_for(
            &meta,
            "FavouriteColor",
            &InputOptions::new().margin_bottom(Margin::M3),
        ),
        input_for(
            &meta,
            "Email",
            &InputOptions::new()
                .placeholder("name@example.com")
                .margin_bottom(Margin::M3),
        ),
        input_for(
            &meta,
            "Description",
            &InputOptions::textarea()
                .attr("rows", "4")
                .margin_bottom(Margin::M3),
        ),
        button("Submit", &ButtonOptions::new().button_type("submit")),
    ]
    .concat();

    let form = Element::<Form>::new()
        .attr("method", "post")
        .attr("novalidate", "novalidate")
        .child::<Div, _>(|d| d.raw(&fields))
        .render();
    section("Form inputs", &form)
}

/// Renders the complete pattern library document.
pub fn render_gallery(ctx: &GalleryContext) -> String {
    debug!(
        page = ctx.page,
        total_pages = ctx.total_pages,
        show_errors = ctx.show_errors,
        "rendering gallery"
    );

    let cdn = &ctx.config.cdn;
    let content = [
        alerts_section(),
        buttons_section(),
        navigation_section(ctx),
        form_section(ctx),
    ]
    .concat();

    Document::new()
        .doctype()
        .root::<Html, _>(|html_el| {
            html_el
                .attr("lang", "en")
                .child::<Head, _>(|head| {
                    head.child::<Meta, _>(|m| m.attr("charset", "UTF-8"))
                        .child::<Meta, _>(|m| {
                            m.attr("name", "viewport")
                                .attr("content", "width=device-width, initial-scale=1.0")
                        })
                        .child::<Title, _>(|t| t.text("Bootstrap helpers"))
                        .child::<Link, _>(|l| stylesheet_link(l, cdn))
                })
                .child::<Body, _>(|body| {
                    body.child::<Main, _>(|main| {
                        main.class("container py-5")
                            .child::<H1, _>(|h| h.class("mb-4").text("Bootstrap helpers"))
                            .child::<Div, _>(|d| d.raw(&content))
                    })
                    .child::<Script, _>(|s| bundle_script(s, cdn))
                })
        })
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(show_errors: bool) -> GalleryContext {
        GalleryContext {
            config: BootstrapConfig::default(),
            page: 3,
            total_pages: 10,
            show_errors,
        }
    }

    #[test]
    fn test_gallery_contains_every_helper() {
        let html = render_gallery(&context(false));
        assert!(html.contains("bootstrap.min.css"));
        assert!(html.contains("bootstrap.bundle.min.js"));
        assert!(html.contains("alert alert-dark"));
        assert!(html.contains("alert-dismissible"));
        assert!(html.contains("btn btn-outline-light"));
        assert!(html.contains("btn btn-primary btn-lg"));
        assert!(html.contains("breadcrumb-item active"));
        assert!(html.contains("page-item active"));
        assert!(html.contains("<textarea"));
        assert!(html.contains(r#"type="email""#));
        assert!(!html.contains("is-invalid"));
    }

    #[test]
    fn test_gallery_document_structure() {
        let html = render_gallery(&context(false));
        let head_end = html.find("</head>").unwrap();
        let link = html.find(r#"<link rel="stylesheet""#).unwrap();
        let script = html.find("<script").unwrap();
        let main_end = html.find("</main>").unwrap();
        assert!(link < head_end);
        assert!(script > main_end);
        assert!(html.contains(r#"<form method="post""#));
    }

    #[test]
    fn test_gallery_with_errors() {
        let html = render_gallery(&context(true));
        assert!(html.contains("is-invalid"));
        assert!(html.contains("is-valid"));
        assert!(html.contains("Please select a favourite color"));
    }
}
