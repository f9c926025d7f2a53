// Copy-to-clipboard for command snippets. Write failures never reach the page.

use std::cell::RefCell;

use crate::error::ClipboardError;
use crate::modules::dom::Document;

pub trait Clipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// In-process clipboard for headless hosts.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: RefCell<Option<String>>,
    denied: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that refuses every write.
    pub fn denied() -> Self {
        Self {
            contents: RefCell::new(None),
            denied: true,
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.denied {
            return Err(ClipboardError::PermissionDenied);
        }
        *self.contents.borrow_mut() = Some(text.to_string());
        Ok(())
    }
}

/// Strips a leading `$` prompt (and the blanks after it) from every line,
/// then trims trailing whitespace from the whole text.
pub fn clean_command_text(text: &str) -> String {
    let stripped: Vec<&str> = text
        .split('\n')
        .map(|line| match line.strip_prefix('$') {
            Some(rest) => rest.trim_start_matches([' ', '\t']),
            None => line,
        })
        .collect();
    stripped.join("\n").trim_end().to_string()
}

/// Resolves `target` to an element's text when it names one, otherwise
/// copies `target` itself. Write failures are dropped.
pub fn copy_snippet(doc: &Document, clipboard: Option<&dyn Clipboard>, target: &str) {
    let payload = match doc.get_element_by_id(target) {
        Some(node) => doc.text_content(node),
        None => target.to_string(),
    };
    let normalized = clean_command_text(&payload);

    let Some(clipboard) = clipboard else {
        log::debug!("[Clipboard] No clipboard available, skipping copy");
        return;
    };
    if let Err(e) = clipboard.write_text(&normalized) {
        log::debug!("[Clipboard] Write ignored: {}", e);
    }
}
