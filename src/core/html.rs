// src/core/html.rs
// Small read helpers over `scraper` element references.
use scraper::ElementRef;

use super::sanitize::normalize_ws;

/// Deep text of an element, whitespace-collapsed.
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Only the element's own text nodes, not its descendants'. Not normalized.
pub fn shallow_text(el: ElementRef<'_>) -> String {
    el.children()
        .filter_map(|n| n.value().as_text())
        .map(|t| &**t)
        .collect()
}

pub fn attr(el: ElementRef<'_>, name: &str) -> Option<String> {
    el.value().attr(name).map(|v| s!(v.trim()))
}

/// Direct element children with the given tag name, in document order.
pub fn child_elements<'a>(el: ElementRef<'a>, tag: &'a str) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    el.children()
        .filter_map(ElementRef::wrap)
        .filter(move |c| c.value().name().eq_ignore_ascii_case(tag))
}
