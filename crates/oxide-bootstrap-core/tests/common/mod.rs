#![allow(dead_code)]

use oxide_bootstrap_core::{plan, PageLinkDescriptor, PageLinkKind, PaginationRequest};

pub fn plan_for(current: usize, total: usize, max_visible: usize) -> Vec<PageLinkDescriptor> {
    plan(&PaginationRequest::new(current, total).max_visible_pages(max_visible))
}

pub fn numbers(links: &[PageLinkDescriptor]) -> Vec<usize> {
    links
        .iter()
        .filter(|l| l.kind == PageLinkKind::Number)
        .map(|l| l.page_number)
        .collect()
}

pub fn active_pages(links: &[PageLinkDescriptor]) -> Vec<usize> {
    links
        .iter()
        .filter(|l| l.is_active)
        .map(|l| l.page_number)
        .collect()
}

pub fn find(links: &[PageLinkDescriptor], kind: PageLinkKind) -> &PageLinkDescriptor {
    links
        .iter()
        .find(|l| l.kind == kind)
        .unwrap_or_else(|| panic!("Expected a {kind:?} link in {links:?}"))
}
