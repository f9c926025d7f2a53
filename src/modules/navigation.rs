// Section switching and the navigation boot sequence.
// Pure logic over the document model; hosts call in through `NavigationHost`.

use std::rc::Rc;

use crate::modules::clipboard::Clipboard;
use crate::modules::dom::{Document, ReadyState, ScrollBehavior};
use crate::modules::widgets;
use crate::settings::Settings;
use crate::state::NavigationSession;

/// Entry points topic modules and the loader call into.
pub trait NavigationHost {
    fn register_tab(&mut self, section_id: &str);
    fn boot_navigation(&mut self);
    fn show_section(&mut self, section_id: &str) -> bool;
}

/// Makes `section_id` the only active section.
///
/// The target must exist and carry the section class. When it does not,
/// nothing is touched and this returns false.
pub fn activate_section(doc: &mut Document, settings: &Settings, section_id: &str) -> bool {
    let markup = &settings.markup;
    let Some(target) = doc.get_element_by_id(section_id) else {
        return false;
    };
    if !doc.has_class(target, &markup.section_class) {
        return false;
    }

    for section in doc.query_selector_all(&markup.sections()) {
        doc.remove_class(section, &markup.active_class);
    }
    doc.add_class(target, &markup.active_class);

    for item in doc.query_selector_all(&markup.nav_items()) {
        doc.remove_class(item, &markup.active_class);
    }
    for link in doc.query_selector_all(&markup.tab_links()) {
        doc.remove_class(link, &markup.active_class);
    }
    for link in doc.query_selector_all(&markup.tab_links_for(section_id)) {
        doc.add_class(link, &markup.active_class);
    }

    doc.viewport_mut().scroll_to(0, ScrollBehavior::Smooth);

    if settings.is_mobile_width(doc.viewport().width) {
        if let Some(sidebar) = doc.get_element_by_id(&markup.sidebar_id) {
            doc.remove_class(sidebar, &markup.open_class);
        }
    }

    true
}

pub struct Navigator {
    document: Document,
    session: NavigationSession,
    settings: Rc<Settings>,
    clipboard: Option<Rc<dyn Clipboard>>,
}

impl Navigator {
    pub fn new(document: Document, settings: Settings) -> Self {
        let session = NavigationSession::new(document.ready_state() != ReadyState::Loading);
        Self {
            document,
            session,
            settings: Rc::new(settings),
            clipboard: None,
        }
    }

    pub fn with_clipboard(mut self, clipboard: Rc<dyn Clipboard>) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn session(&self) -> &NavigationSession {
        &self.session
    }

    /// The host page finished parsing. Runs deferred work once.
    pub fn document_ready(&mut self) {
        if self.document.ready_state() == ReadyState::Loading {
            self.document.set_ready_state(ReadyState::Interactive);
        }
        let ran = self.session.ready.open(&mut self.document);
        if ran > 0 {
            log::debug!("[Navigation] Document ready, ran {} deferred callbacks", ran);
        }
    }

    pub fn register_tab(&mut self, section_id: &str) {
        if !self.session.register_tab(section_id) {
            return;
        }
        let settings = Rc::clone(&self.settings);
        let section_id = section_id.to_string();
        self.session.ready.on_ready(&mut self.document, move |doc| {
            let bound = widgets::bind_tab_links(doc, &settings, &section_id);
            log::debug!("[Navigation] Tab '{}' bound to {} links", section_id, bound);
        });
    }

    pub fn show_section(&mut self, section_id: &str) -> bool {
        let shown = activate_section(&mut self.document, &self.settings, section_id);
        if !shown {
            log::debug!("[Navigation] No section '{}', ignoring", section_id);
        }
        shown
    }

    pub fn boot_navigation(&mut self) {
        if !self.session.mark_booted() {
            log::warn!("[Navigation] Boot requested twice, ignoring");
            return;
        }
        let settings = Rc::clone(&self.settings);
        let clipboard = self.clipboard.clone();
        self.session.ready.on_ready(&mut self.document, move |doc| {
            let markup = &settings.markup;
            widgets::init_search_filter(doc, markup);
            widgets::init_accordions(doc, markup);
            widgets::init_copy_buttons(doc, markup, clipboard);
            widgets::init_mobile_menu(doc, markup);
            if !activate_section(doc, &settings, &settings.default_section) {
                log::warn!(
                    "[Navigation] Default section '{}' not found",
                    settings.default_section
                );
            }
        });
    }
}

impl NavigationHost for Navigator {
    fn register_tab(&mut self, section_id: &str) {
        Navigator::register_tab(self, section_id);
    }

    fn boot_navigation(&mut self) {
        Navigator::boot_navigation(self);
    }

    fn show_section(&mut self, section_id: &str) -> bool {
        Navigator::show_section(self, section_id)
    }
}
