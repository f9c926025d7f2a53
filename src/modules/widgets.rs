// Binds direct-manipulation affordances to the document.
// Every binder short-circuits when its elements are missing.

use std::rc::Rc;

use crate::modules::clipboard::{self, Clipboard};
use crate::modules::dom::{Document, Event, Signal};
use crate::modules::navigation::activate_section;
use crate::modules::search;
use crate::settings::{Markup, Settings};

pub fn init_search_filter(doc: &mut Document, markup: &Markup) -> bool {
    let Some(input) = doc.query_selector(&markup.search_input()) else {
        return false;
    };
    let markup = markup.clone();
    doc.add_listener(
        input,
        Signal::Input,
        Rc::new(move |doc: &mut Document, event: &mut Event| {
            let query = doc
                .element(event.target)
                .map(|el| el.value().to_string())
                .unwrap_or_default();
            search::apply_filter(doc, &markup, &query);
        }),
    );
    true
}

/// Returns the number of headers bound.
pub fn init_accordions(doc: &mut Document, markup: &Markup) -> usize {
    let headers = doc.query_selector_all(&markup.accordion_headers());
    for header in &headers {
        let open_class = markup.open_class.clone();
        doc.add_listener(
            *header,
            Signal::Click,
            Rc::new(move |doc: &mut Document, event: &mut Event| {
                let Some(parent) = doc.parent(event.target) else { return };
                if let Some(el) = doc.element_mut(parent) {
                    el.toggle_class(&open_class);
                }
            }),
        );
    }
    headers.len()
}

pub fn init_copy_buttons(
    doc: &mut Document,
    markup: &Markup,
    clipboard: Option<Rc<dyn Clipboard>>,
) -> usize {
    let buttons = doc.query_selector_all(&markup.copy_buttons());
    for button in &buttons {
        let attr = markup.copy_target_attr.clone();
        let clipboard = clipboard.clone();
        doc.add_listener(
            *button,
            Signal::Click,
            Rc::new(move |doc: &mut Document, event: &mut Event| {
                let target = doc
                    .element(event.target)
                    .and_then(|el| el.attr(&attr))
                    .unwrap_or_default()
                    .to_string();
                if !target.is_empty() {
                    clipboard::copy_snippet(doc, clipboard.as_deref(), &target);
                }
            }),
        );
    }
    buttons.len()
}

pub fn init_mobile_menu(doc: &mut Document, markup: &Markup) -> bool {
    let toggle = doc.query_selector(&markup.mobile_menu_toggle());
    let sidebar = doc.get_element_by_id(&markup.sidebar_id);
    let (Some(toggle), Some(sidebar)) = (toggle, sidebar) else {
        return false;
    };
    let open_class = markup.open_class.clone();
    doc.add_listener(
        toggle,
        Signal::Click,
        Rc::new(move |doc: &mut Document, _: &mut Event| {
            if let Some(el) = doc.element_mut(sidebar) {
                el.toggle_class(&open_class);
            }
        }),
    );
    true
}

/// Makes every link targeting `section_id` switch to it on click.
pub fn bind_tab_links(doc: &mut Document, settings: &Rc<Settings>, section_id: &str) -> usize {
    let links = doc.query_selector_all(&settings.markup.tab_links_for(section_id));
    for link in &links {
        let settings = Rc::clone(settings);
        let section_id = section_id.to_string();
        doc.add_listener(
            *link,
            Signal::Click,
            Rc::new(move |doc: &mut Document, event: &mut Event| {
                event.prevent_default();
                activate_section(doc, &settings, &section_id);
            }),
        );
    }
    links.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::clipboard::MemoryClipboard;
    use crate::modules::dom::{Display, Element};
    use crate::modules::test_support::docs_page;

    #[test]
    fn test_search_input_drives_filter() {
        let settings = Settings::default();
        let mut page = docs_page(1280);
        assert!(init_search_filter(&mut page.doc, &settings.markup));

        page.doc.input(page.search, "Fedora");
        assert!(!page.doc.element(page.link("intro-distros")).unwrap().is_hidden());
        assert!(page.doc.element(page.link("fs-nav")).unwrap().is_hidden());
        assert!(page.doc.element(page.groups[0]).unwrap().is_hidden());

        page.doc.input(page.search, "");
        assert_eq!(page.doc.element(page.link("fs-nav")).unwrap().display(), Some(Display::Flex));
        assert_eq!(page.doc.element(page.groups[0]).unwrap().display(), Some(Display::Block));
    }

    #[test]
    fn test_accordions_toggle_independently() {
        let settings = Settings::default();
        let mut page = docs_page(1280);
        assert_eq!(init_accordions(&mut page.doc, &settings.markup), 2);

        let (first_header, first) = page.accordions[0];
        let (second_header, second) = page.accordions[1];

        page.doc.click(first_header);
        page.doc.click(second_header);
        assert!(page.doc.has_class(first, "open"));
        assert!(page.doc.has_class(second, "open"));

        page.doc.click(first_header);
        assert!(!page.doc.has_class(first, "open"));
        assert!(page.doc.has_class(second, "open"));
    }

    #[test]
    fn test_copy_buttons_write_cleaned_text() {
        let settings = Settings::default();
        let mut page = docs_page(1280);
        let clipboard = Rc::new(MemoryClipboard::new());
        let shared: Rc<dyn Clipboard> = clipboard.clone();
        assert_eq!(init_copy_buttons(&mut page.doc, &settings.markup, Some(shared)), 3);

        page.doc.click(page.copy_empty);
        assert_eq!(clipboard.contents(), None);

        page.doc.click(page.copy_by_id);
        assert_eq!(clipboard.contents().as_deref(), Some("ls -la\npwd"));

        page.doc.click(page.copy_literal);
        assert_eq!(clipboard.contents().as_deref(), Some("uname -r"));
    }

    #[test]
    fn test_mobile_menu_toggles_sidebar() {
        let settings = Settings::default();
        let mut page = docs_page(375);
        assert!(init_mobile_menu(&mut page.doc, &settings.markup));

        page.doc.click(page.menu_toggle);
        assert!(page.doc.has_class(page.sidebar, "open"));
        page.doc.click(page.menu_toggle);
        assert!(!page.doc.has_class(page.sidebar, "open"));
    }

    #[test]
    fn test_missing_elements_bind_nothing() {
        let settings = Settings::default();
        let mut doc = Document::new(1280);
        doc.append(None, Element::new("button").with_attr("data-mobile-menu", ""));

        assert!(!init_search_filter(&mut doc, &settings.markup));
        assert_eq!(init_accordions(&mut doc, &settings.markup), 0);
        assert_eq!(init_copy_buttons(&mut doc, &settings.markup, None), 0);
        assert!(!init_mobile_menu(&mut doc, &settings.markup));
    }

    #[test]
    fn test_tab_links_prevent_default_and_switch() {
        let settings = Rc::new(Settings::default());
        let mut page = docs_page(1280);
        assert_eq!(bind_tab_links(&mut page.doc, &settings, "fs-nav"), 2);

        let event = page.doc.click(page.hero_link);
        assert!(event.default_prevented());
        assert_eq!(page.active_sections(), vec!["fs-nav".to_string()]);
    }
}
