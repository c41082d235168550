//! Pagination window planning.
//!
//! [`plan`] turns a [`PaginationRequest`] into the ordered page links to
//! render. It never builds URLs: callers resolve them through
//! [`PageLinkDescriptor::href`], which skips disabled links so the URL
//! function is never asked for page 0 or `total_pages + 1`.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Text shown on the navigation links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationLabels {
    pub first: String,
    pub last: String,
    pub previous: String,
    pub next: String,
}

impl Default for PaginationLabels {
    fn default() -> Self {
        Self {
            first: "«".to_string(),
            last: "»".to_string(),
            previous: "‹".to_string(),
            next: "›".to_string(),
        }
    }
}

/// Input to [`plan`].
///
/// `current_page` is expected to be within `1..=total_pages`; the planner
/// only guards the `total_pages <= 1` case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationRequest {
    /// The active page, 1-based.
    pub current_page: usize,
    /// Total number of pages.
    pub total_pages: usize,
    /// Maximum number of numbered links. Zero is treated as one.
    pub max_visible_pages: usize,
    /// Whether to emit the first and last links.
    pub show_first_last: bool,
    /// Navigation link labels.
    pub labels: PaginationLabels,
}

impl PaginationRequest {
    /// Creates a request with the default window of 5 and first/last links.
    pub fn new(current_page: usize, total_pages: usize) -> Self {
        Self {
            current_page,
            total_pages,
            max_visible_pages: 5,
            show_first_last: true,
            labels: PaginationLabels::default(),
        }
    }

    /// Sets the maximum number of numbered links.
    #[must_use]
    pub const fn max_visible_pages(mut self, n: usize) -> Self {
        self.max_visible_pages = n;
        self
    }

    /// Enables or disables the first and last links.
    #[must_use]
    pub const fn show_first_last(mut self, show: bool) -> Self {
        self.show_first_last = show;
        self
    }

    /// Sets the navigation labels.
    #[must_use]
    pub fn labels(mut self, labels: PaginationLabels) -> Self {
        self.labels = labels;
        self
    }
}

/// Role of a link in the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageLinkKind {
    First,
    Previous,
    Number,
    Next,
    Last,
}

/// One renderable pagination control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLinkDescriptor {
    /// Target page. Disabled links keep their intended target.
    pub page_number: usize,
    /// Link text.
    pub label: String,
    /// Whether the link can be followed.
    pub enabled: bool,
    /// Whether this is the current page.
    pub is_active: bool,
    /// Role of the link.
    pub kind: PageLinkKind,
}

impl PageLinkDescriptor {
    fn nav(kind: PageLinkKind, page_number: usize, label: &str, enabled: bool) -> Self {
        Self {
            page_number,
            label: label.to_string(),
            enabled,
            is_active: false,
            kind,
        }
    }

    fn number(page_number: usize, current_page: usize) -> Self {
        Self {
            page_number,
            label: page_number.to_string(),
            enabled: true,
            is_active: page_number == current_page,
            kind: PageLinkKind::Number,
        }
    }

    /// Resolves the link target.
    ///
    /// Disabled links resolve to `#` and `page_url` is not called.
    pub fn href<F>(&self, page_url: F) -> String
    where
        F: FnOnce(usize) -> String,
    {
        if self.enabled {
            page_url(self.page_number)
        } else {
            "#".to_string()
        }
    }
}

/// Computes the inclusive range of numbered pages to show.
///
/// The window is centred on the current page, clamped at page 1, and slid
/// left when it would run past the last page.
pub fn visible_window(current_page: usize, total_pages: usize, max_visible: usize) -> (usize, usize) {
    let width = max_visible.max(1).min(total_pages.max(1));

    let mut start = current_page.saturating_sub(width / 2).max(1);
    let end = total_pages.min(start.saturating_add(width - 1));

    if end < start || end - start + 1 < width {
        start = end.saturating_sub(width - 1).max(1);
    }

    (start, end)
}

/// Plans the pagination links for `req`.
///
/// Returns an empty list when there is at most one page.
///
/// # Example
///
/// ```rust
/// use oxide_bootstrap_core::{plan, PaginationRequest};
///
/// let links = plan(&PaginationRequest::new(5, 20));
/// let numbers: Vec<usize> = links
///     .iter()
///     .filter(|l| l.label.parse::<usize>().is_ok())
///     .map(|l| l.page_number)
///     .collect();
/// assert_eq!(numbers, vec![3, 4, 5, 6, 7]);
/// ```
pub fn plan(req: &PaginationRequest) -> Vec<PageLinkDescriptor> {
    if req.total_pages <= 1 {
        return Vec::new();
    }

    let current = req.current_page;
    let total = req.total_pages;
    let has_previous = current > 1;
    let has_next = current < total;

    let (start, end) = visible_window(current, total, req.max_visible_pages);
    debug!(current, total, start, end, "planned pagination window");

    let mut links = Vec::with_capacity(end.saturating_sub(start) + 5);

    if req.show_first_last {
        links.push(PageLinkDescriptor::nav(
            PageLinkKind::First,
            1,
            &req.labels.first,
            has_previous,
        ));
    }
    links.push(PageLinkDescriptor::nav(
        PageLinkKind::Previous,
        current.saturating_sub(1),
        &req.labels.previous,
        has_previous,
    ));

    links.extend((start..=end).map(|page| PageLinkDescriptor::number(page, current)));

    links.push(PageLinkDescriptor::nav(
        PageLinkKind::Next,
        current.saturating_add(1),
        &req.labels.next,
        has_next,
    ));
    if req.show_first_last {
        links.push(PageLinkDescriptor::nav(
            PageLinkKind::Last,
            total,
            &req.labels.last,
            has_next,
        ));
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_middle() {
        assert_eq!(visible_window(5, 20, 5), (3, 7));
    }

    #[test]
    fn test_window_clamped_at_start() {
        assert_eq!(visible_window(1, 20, 5), (1, 5));
        assert_eq!(visible_window(2, 20, 5), (1, 5));
    }

    #[test]
    fn test_window_reflows_at_end() {
        assert_eq!(visible_window(20, 20, 5), (16, 20));
        assert_eq!(visible_window(19, 20, 5), (16, 20));
    }

    #[test]
    fn test_window_even_width() {
        assert_eq!(visible_window(10, 20, 4), (8, 11));
    }

    #[test]
    fn test_window_fewer_pages_than_width() {
        assert_eq!(visible_window(2, 3, 5), (1, 3));
    }

    #[test]
    fn test_window_zero_width_treated_as_one() {
        assert_eq!(visible_window(4, 10, 0), (4, 4));
    }

    #[test]
    fn test_window_current_past_end() {
        assert_eq!(visible_window(30, 20, 5), (16, 20));
    }

    #[test]
    fn test_window_current_past_end_single_width() {
        assert_eq!(visible_window(30, 20, 1), (20, 20));
    }

    #[test]
    fn test_window_huge_width() {
        assert_eq!(visible_window(1, 3, usize::MAX), (1, 3));
        assert_eq!(visible_window(usize::MAX, usize::MAX, usize::MAX), (1, usize::MAX));
    }

    #[test]
    fn test_plan_huge_width_and_last_page() {
        let links = plan(&PaginationRequest::new(1, 3).max_visible_pages(usize::MAX));
        let numbers: Vec<usize> = links
            .iter()
            .filter(|l| l.kind == PageLinkKind::Number)
            .map(|l| l.page_number)
            .collect();
        assert_eq!(numbers, vec![1, 2, 3]);

        let links = plan(&PaginationRequest::new(usize::MAX, usize::MAX).max_visible_pages(1));
        let next = links.iter().find(|l| l.kind == PageLinkKind::Next).unwrap();
        assert!(!next.enabled);
        assert_eq!(next.page_number, usize::MAX);
    }

    #[test]
    fn test_href_skips_disabled() {
        let link = PageLinkDescriptor::nav(PageLinkKind::Previous, 0, "‹", false);
        let href = link.href(|_| panic!("page_url called for disabled link"));
        assert_eq!(href, "#");
    }

    #[test]
    fn test_href_enabled() {
        let link = PageLinkDescriptor::number(4, 5);
        assert_eq!(link.href(|p| format!("?page={p}")), "?page=4");
    }
}
