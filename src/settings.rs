use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::SettingsError;
use crate::modules::selector::Selector;

const TOPICS: [&str; 26] = [
    "intro-linux",
    "intro-distros",
    "fs-hierarchy",
    "fs-nav",
    "fs-manip",
    "fs-advanced",
    "term-shell",
    "term-pipes",
    "term-scripting",
    "admin-perms",
    "admin-sys",
    "admin-net",
    "rescue-grub",
    "rescue-disk",
    "custom-icons",
    "sys-debug",
    "devtools",
    "manim",
    "uv-python",
    "complementos-instalacion",
    "configuracion-ia-cli",
    "datascience",
    "anaconda",
    "essentials",
    "text-files",
    "sys-mgmt",
];

/// Names the host page uses for the pieces navigation binds to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Markup {
    pub sidebar_id: String,
    pub nav_item_class: String,
    pub group_title_class: String,
    pub section_class: String,
    pub search_input_class: String,
    pub accordion_header_class: String,
    pub section_attr: String,
    pub tags_attr: String,
    pub copy_target_attr: String,
    pub mobile_menu_attr: String,
    pub active_class: String,
    pub open_class: String,
}

impl Default for Markup {
    fn default() -> Self {
        Self {
            sidebar_id: "sidebar".to_string(),
            nav_item_class: "nav-item".to_string(),
            group_title_class: "nav-group-title".to_string(),
            section_class: "section".to_string(),
            search_input_class: "search-input".to_string(),
            accordion_header_class: "accordion-header".to_string(),
            section_attr: "data-section".to_string(),
            tags_attr: "data-tags".to_string(),
            copy_target_attr: "data-copy-target".to_string(),
            mobile_menu_attr: "data-mobile-menu".to_string(),
            active_class: "active".to_string(),
            open_class: "open".to_string(),
        }
    }
}

impl Markup {
    pub fn sections(&self) -> Selector {
        Selector::Class(self.section_class.clone())
    }

    pub fn nav_items(&self) -> Selector {
        Selector::Class(self.nav_item_class.clone())
    }

    pub fn group_titles(&self) -> Selector {
        Selector::Class(self.group_title_class.clone())
    }

    pub fn search_input(&self) -> Selector {
        Selector::Class(self.search_input_class.clone())
    }

    pub fn accordion_headers(&self) -> Selector {
        Selector::Class(self.accordion_header_class.clone())
    }

    /// Every tab link, whatever section it targets.
    pub fn tab_links(&self) -> Selector {
        Selector::attr(&self.section_attr)
    }

    /// Tab links targeting one section.
    pub fn tab_links_for(&self, section_id: &str) -> Selector {
        Selector::attr_eq(&self.section_attr, section_id)
    }

    pub fn copy_buttons(&self) -> Selector {
        Selector::attr(&self.copy_target_attr)
    }

    pub fn mobile_menu_toggle(&self) -> Selector {
        Selector::attr(&self.mobile_menu_attr)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub default_section: String,
    /// Viewports at or below this logical width close the sidebar on navigation.
    pub mobile_breakpoint: u32,
    pub topic_modules: Vec<String>,
    pub markup: Markup,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_section: "intro-linux".to_string(),
            mobile_breakpoint: 768,
            topic_modules: TOPICS
                .iter()
                .map(|topic| format!("topics/{}.json", topic))
                .collect(),
            markup: Markup::default(),
        }
    }
}

impl Settings {
    pub fn is_mobile_width(&self, width: u32) -> bool {
        width <= self.mobile_breakpoint
    }

    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                log::warn!("[Settings] Failed to parse settings: {}, returning defaults", e);
                Self::default()
            }),
            Err(e) => {
                log::warn!("[Settings] Failed to read file: {}, returning defaults", e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let tmp_path = path.with_extension("tmp");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;

        // Write to tmp, then rename, so a crash never leaves a half-written file.
        fs::write(&tmp_path, json)?;
        fs::rename(tmp_path, path)?;

        Ok(())
    }
}
