// Topic modules: each one owns a section and registers it as a tab when executed.

use serde::Deserialize;

use crate::error::LoadError;
use crate::modules::navigation::NavigationHost;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TopicModule {
    pub section: String,
    #[serde(default)]
    pub title: Option<String>,
}

impl TopicModule {
    pub fn parse(locator: &str, bytes: &[u8]) -> Result<Self, LoadError> {
        let module: TopicModule =
            serde_json::from_slice(bytes).map_err(|e| LoadError::Malformed {
                locator: locator.to_string(),
                reason: e.to_string(),
            })?;
        if module.section.trim().is_empty() {
            return Err(LoadError::Malformed {
                locator: locator.to_string(),
                reason: "empty section".to_string(),
            });
        }
        Ok(module)
    }

    pub fn execute<H: NavigationHost + ?Sized>(&self, host: &mut H) {
        host.register_tab(&self.section);
    }
}
