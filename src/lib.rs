// Documentation site navigation library entry point.
// Exposes every module so hosts can embed the pieces they need
// and each one can be tested independently.

pub mod error;
pub mod settings;

// Session state owned by a navigator
pub mod state;

// Pure logic modules
pub mod modules;

pub use error::{ClipboardError, LoadError, SettingsError};
pub use modules::dom::{Document, Element, NodeId, ReadyState, Signal};
pub use modules::loader::{load_topics, FsFetcher, HttpFetcher, LoadReport, ResourceFetcher};
pub use modules::navigation::{NavigationHost, Navigator};
pub use settings::Settings;

/// Loads every configured topic module, then boots navigation.
pub async fn run<F: ResourceFetcher>(fetcher: &F, navigator: &mut Navigator) -> LoadReport {
    let locators = navigator.settings().topic_modules.clone();
    log::info!("[Loader] Loading {} topic modules", locators.len());
    load_topics(fetcher, &locators, navigator).await
}
