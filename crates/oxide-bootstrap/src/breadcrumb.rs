//! Breadcrumb helper.

use ironhtml::typed::Element;
use ironhtml_elements::{Li, Nav, Ol, A};

/// Renders a Bootstrap breadcrumb trail from `(text, url)` pairs.
///
/// The last item is the current page: it is marked active and rendered
/// as plain text. An empty trail renders nothing.
///
/// ```rust
/// use oxide_bootstrap::breadcrumb;
///
/// let html = breadcrumb(&[
///     ("Home", "/"),
///     ("Products", "/products"),
///     ("Laptops", "/products/laptops"),
/// ]);
/// assert!(html.contains(r#"href="/products""#));
/// ```
pub fn breadcrumb<T, U>(items: &[(T, U)]) -> String
where
    T: AsRef<str>,
    U: AsRef<str>,
{
    if items.is_empty() {
        return String::new();
    }

    let last_idx = items.len() - 1;
    Element::<Nav>::new()
        .attr("aria-label", "breadcrumb")
        .child::<Ol, _>(|ol| {
            let mut ol = ol.class("breadcrumb");
            for (i, (text, url)) in items.iter().enumerate() {
                let text = text.as_ref();
                let url = url.as_ref();
                ol = ol.child::<Li, _>(|li| {
                    if i == last_idx {
                        li.class("breadcrumb-item active")
                            .attr("aria-current", "page")
                            .text(text)
                    } else {
                        li.class("breadcrumb-item")
                            .child::<A, _>(|a| a.attr("href", url).text(text))
                    }
                });
            }
            ol
        })
        .render()
}
