// Session state owned by one navigator for the lifetime of a page.

use std::collections::HashSet;

use crate::modules::dom::Document;
use crate::modules::ready::ReadyGate;

pub struct NavigationSession {
    registered_tabs: HashSet<String>,
    pub(crate) ready: ReadyGate<Document>,
    booted: bool,
}

impl NavigationSession {
    pub fn new(document_ready: bool) -> Self {
        Self {
            registered_tabs: HashSet::new(),
            ready: if document_ready {
                ReadyGate::open_now()
            } else {
                ReadyGate::pending()
            },
            booted: false,
        }
    }

    /// Returns false for empty ids and for ids already registered.
    pub fn register_tab(&mut self, section_id: &str) -> bool {
        if section_id.is_empty() {
            return false;
        }
        self.registered_tabs.insert(section_id.to_string())
    }

    pub fn is_registered(&self, section_id: &str) -> bool {
        self.registered_tabs.contains(section_id)
    }

    pub fn registered_count(&self) -> usize {
        self.registered_tabs.len()
    }

    /// Returns true only the first time.
    pub fn mark_booted(&mut self) -> bool {
        !std::mem::replace(&mut self.booted, true)
    }

    pub fn is_booted(&self) -> bool {
        self.booted
    }

    pub fn is_ready(&self) -> bool {
        self.ready.is_open()
    }
}
