//! Pagination helper.

use ironhtml::typed::Element;
use ironhtml_elements::{Li, Nav, Ul, A};
use oxide_bootstrap_core::{plan, ClassList, PageLinkDescriptor, PageLinkKind, PaginationRequest, Size};
use tracing::debug;

fn aria_label(kind: PageLinkKind) -> Option<&'static str> {
    match kind {
        PageLinkKind::First => Some("First"),
        PageLinkKind::Previous => Some("Previous"),
        PageLinkKind::Next => Some("Next"),
        PageLinkKind::Last => Some("Last"),
        PageLinkKind::Number => None,
    }
}

fn render_item<F>(ul: Element<Ul>, link: &PageLinkDescriptor, page_url: &F) -> Element<Ul>
where
    F: Fn(usize) -> String,
{
    let mut item_class = ClassList::new("page-item");
    item_class
        .push_if(!link.enabled, "disabled")
        .push_if(link.is_active, "active");
    let item_class = item_class.to_string();
    let href = link.href(page_url);
    let label = aria_label(link.kind);

    ul.child::<Li, _>(|li| {
        li.class(&item_class)
            .when(link.is_active, |li| li.attr("aria-current", "page"))
            .child::<A, _>(|a| {
                let a = a.class("page-link").attr("href", &href);
                let a = match label {
                    Some(l) => a.attr("aria-label", l),
                    None => a,
                };
                a.text(&link.label)
            })
    })
}

/// Renders a Bootstrap pagination bar.
///
/// `page_url` maps a page number to its URL. It is only called for enabled
/// links; disabled ones point at `#`. Renders nothing for a single page.
///
/// ```rust
/// use oxide_bootstrap::pagination;
/// use oxide_bootstrap_core::{PaginationRequest, Size};
///
/// let html = pagination(
///     &PaginationRequest::new(2, 10).max_visible_pages(7),
///     Size::Small,
///     |page| format!("/posts?page={page}"),
/// );
/// assert!(html.contains("pagination pagination-sm"));
/// assert!(html.contains(r#"href="/posts?page=3""#));
/// ```
pub fn pagination<F>(request: &PaginationRequest, size: Size, page_url: F) -> String
where
    F: Fn(usize) -> String,
{
    let links = plan(request);
    if links.is_empty() {
        debug!(total_pages = request.total_pages, "skipping pagination");
        return String::new();
    }

    let mut ul_class = ClassList::new("pagination");
    if let Some(modifier) = size.modifier("pagination") {
        ul_class.push(&modifier);
    }
    let ul_class = ul_class.to_string();

    Element::<Nav>::new()
        .attr("aria-label", "Page navigation")
        .child::<Ul, _>(|ul| {
            let mut ul = ul.class(&ul_class);
            for link in &links {
                ul = render_item(ul, link, &page_url);
            }
            ul
        })
        .render()
}
