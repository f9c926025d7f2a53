// Pure navigation logic - no host-surface imports.
pub mod clipboard;
pub mod dom;
pub mod loader;       // Topic module fetching and the boot continuation
pub mod navigation;
pub mod ready;
pub mod search;
pub mod selector;
pub mod tabs;         // Topic module format
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_support;
