// Shared fixture: a small documentation page with every piece navigation binds to.

use std::collections::HashMap;

use crate::modules::dom::{Document, Element, NodeId, ReadyState};

pub struct DocsPage {
    pub doc: Document,
    pub sidebar: NodeId,
    pub search: NodeId,
    pub menu_toggle: NodeId,
    pub groups: Vec<NodeId>,
    pub nav_items: Vec<NodeId>,
    pub hero_link: NodeId,
    pub accordions: Vec<(NodeId, NodeId)>,
    pub copy_by_id: NodeId,
    pub copy_literal: NodeId,
    pub copy_empty: NodeId,
    pub not_a_section: NodeId,
    sections: HashMap<String, NodeId>,
    links: HashMap<String, NodeId>,
}

impl DocsPage {
    pub fn section(&self, id: &str) -> NodeId {
        self.sections[id]
    }

    pub fn link(&self, section_id: &str) -> NodeId {
        self.links[section_id]
    }

    pub fn active_sections(&self) -> Vec<String> {
        let mut active: Vec<String> = self
            .sections
            .iter()
            .filter(|(_, node)| self.doc.has_class(**node, "active"))
            .map(|(id, _)| id.clone())
            .collect();
        active.sort();
        active
    }
}

const NAV: [(&str, &str, &str, &str); 4] = [
    ("Introducción", "intro-linux", "Qué es Linux", "kernel gnu"),
    ("Introducción", "intro-distros", "Distribuciones", "ubuntu fedora"),
    ("Sistema de archivos", "fs-nav", "Navegación y rutas", "cd ls"),
    ("Rescate", "rescue-disk", "Reparar particiones", "fsck disk"),
];

/// Builds the page in `ReadyState::Loading`.
pub fn docs_page(viewport_width: u32) -> DocsPage {
    let mut doc = Document::new(viewport_width);
    doc.set_ready_state(ReadyState::Loading);

    let sidebar = doc.append(None, Element::new("aside").with_id("sidebar"));
    let search = doc.append(Some(sidebar), Element::new("input").with_class("search-input"));

    let mut groups = Vec::new();
    let mut nav_items = Vec::new();
    let mut links = HashMap::new();
    let mut last_group = "";
    for (group, section, label, tags) in NAV {
        if group != last_group {
            groups.push(doc.append(
                Some(sidebar),
                Element::new("div").with_class("nav-group-title").with_text(group),
            ));
            last_group = group;
        }
        let item = doc.append(
            Some(sidebar),
            Element::new("a")
                .with_class("nav-item")
                .with_attr("data-section", section)
                .with_attr("data-tags", tags),
        );
        doc.append(Some(item), Element::new("span").with_text(label));
        nav_items.push(item);
        links.insert(section.to_string(), item);
    }

    let menu_toggle = doc.append(None, Element::new("button").with_attr("data-mobile-menu", ""));
    let main = doc.append(None, Element::new("main"));

    let mut sections = HashMap::new();
    for (_, section, label, _) in NAV {
        let node = doc.append(
            Some(main),
            Element::new("section").with_class("section").with_id(section),
        );
        doc.append(Some(node), Element::new("h1").with_text(label));
        sections.insert(section.to_string(), node);
    }

    let intro = sections["intro-linux"];
    let hero_link = doc.append(
        Some(intro),
        Element::new("a")
            .with_class("hero-link")
            .with_attr("data-section", "fs-nav")
            .with_text("Empieza aquí"),
    );

    let mut accordions = Vec::new();
    for title in ["Historia", "Kernel"] {
        let accordion = doc.append(Some(intro), Element::new("div").with_class("accordion"));
        let header = doc.append(
            Some(accordion),
            Element::new("div").with_class("accordion-header").with_text(title),
        );
        doc.append(Some(accordion), Element::new("div").with_class("accordion-body"));
        accordions.push((header, accordion));
    }

    let pre = doc.append(Some(intro), Element::new("pre").with_id("cmd-ls"));
    doc.append(Some(pre), Element::new("code").with_text("$ ls -la\n"));
    doc.append(Some(pre), Element::new("code").with_text("$ pwd\n"));
    let copy_by_id = doc.append(
        Some(intro),
        Element::new("button").with_attr("data-copy-target", "cmd-ls"),
    );
    let copy_literal = doc.append(
        Some(intro),
        Element::new("button").with_attr("data-copy-target", "$ uname -r"),
    );
    let copy_empty = doc.append(
        Some(intro),
        Element::new("button").with_attr("data-copy-target", ""),
    );

    let not_a_section = doc.append(Some(main), Element::new("div").with_id("footer"));

    DocsPage {
        doc,
        sidebar,
        search,
        menu_toggle,
        groups,
        nav_items,
        hero_link,
        accordions,
        copy_by_id,
        copy_literal,
        copy_empty,
        not_a_section,
        sections,
        links,
    }
}
