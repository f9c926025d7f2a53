// Sidebar search filter.
// While a query is active the group headers are hidden, so matches show as a flat list.

use crate::modules::dom::{Display, Document};
use crate::settings::Markup;

/// `query` must already be lowercase.
pub fn item_matches(query: &str, text: &str, tags: &str) -> bool {
    query.is_empty()
        || text.to_lowercase().contains(query)
        || tags.to_lowercase().contains(query)
}

/// Applies `query` to every navigable item and group header.
/// Returns the number of items left visible.
pub fn apply_filter(doc: &mut Document, markup: &Markup, query: &str) -> usize {
    let query = query.to_lowercase();
    let mut visible = 0;

    for item in doc.query_selector_all(&markup.nav_items()) {
        let text = doc.text_content(item);
        let Some(el) = doc.element_mut(item) else { continue };
        let tags = el.attr(&markup.tags_attr).unwrap_or_default().to_string();
        if item_matches(&query, &text, &tags) {
            el.set_display(Display::Flex);
            visible += 1;
        } else {
            el.set_display(Display::None);
        }
    }

    let group_display = if query.is_empty() { Display::Block } else { Display::None };
    for group in doc.query_selector_all(&markup.group_titles()) {
        if let Some(el) = doc.element_mut(group) {
            el.set_display(group_display);
        }
    }

    visible
}
