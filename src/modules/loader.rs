// Topic module loader.
//
// Every fetch is issued up front. Modules execute in the order their fetches
// settle, and navigation boots exactly once after the whole batch has settled,
// however many failed. There are no retries and no timeout: a fetch that never
// settles means boot never happens.

use std::path::{Component, Path, PathBuf};

use futures_util::stream::{FuturesUnordered, StreamExt};
use url::Url;

use crate::error::LoadError;
use crate::modules::navigation::NavigationHost;
use crate::modules::tabs::TopicModule;

#[allow(async_fn_in_trait)]
pub trait ResourceFetcher {
    async fn fetch(&self, locator: &str) -> Result<Vec<u8>, LoadError>;
}

/// Reads static topic assets below a root directory. Absolute locators and
/// locators with `..` segments are refused.
pub struct FsFetcher {
    root: PathBuf,
}

impl FsFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn resolve(&self, locator: &str) -> Result<PathBuf, LoadError> {
        let relative = Path::new(locator);
        let confined = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
        if locator.is_empty() || !confined {
            return Err(LoadError::OutsideRoot {
                locator: locator.to_string(),
            });
        }
        Ok(self.root.join(relative))
    }
}

impl ResourceFetcher for FsFetcher {
    async fn fetch(&self, locator: &str) -> Result<Vec<u8>, LoadError> {
        let path = self.resolve(locator)?;
        tokio::fs::read(&path).await.map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => LoadError::Missing {
                locator: locator.to_string(),
            },
            _ => LoadError::Io {
                locator: locator.to_string(),
                source,
            },
        })
    }
}

/// Fetches topic modules relative to a base URL.
pub struct HttpFetcher {
    base: Url,
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(base: Url) -> Self {
        Self {
            base,
            client: reqwest::Client::new(),
        }
    }

    pub fn resolve(&self, locator: &str) -> Result<Url, LoadError> {
        self.base
            .join(locator)
            .map_err(|source| LoadError::InvalidLocator {
                locator: locator.to_string(),
                source,
            })
    }
}

impl ResourceFetcher for HttpFetcher {
    async fn fetch(&self, locator: &str) -> Result<Vec<u8>, LoadError> {
        let url = self.resolve(locator)?;
        let http_error = |source| LoadError::Http {
            locator: locator.to_string(),
            source,
        };
        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(http_error)?;
        let body = response.bytes().await.map_err(http_error)?;
        Ok(body.to_vec())
    }
}

/// Outcome of one batch, both lists in settle order.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub loaded: Vec<String>,
    pub failed: Vec<LoadError>,
}

impl LoadReport {
    pub fn settled(&self) -> usize {
        self.loaded.len() + self.failed.len()
    }

    /// The failure that settled first.
    pub fn first_failure(&self) -> Option<&LoadError> {
        self.failed.first()
    }
}

pub async fn load_topics<F, H>(fetcher: &F, locators: &[String], host: &mut H) -> LoadReport
where
    F: ResourceFetcher,
    H: NavigationHost + ?Sized,
{
    let mut pending: FuturesUnordered<_> = locators
        .iter()
        .map(|locator| async move { (locator, fetcher.fetch(locator).await) })
        .collect();

    let mut report = LoadReport::default();
    while let Some((locator, outcome)) = pending.next().await {
        match outcome.and_then(|bytes| TopicModule::parse(locator, &bytes)) {
            Ok(module) => {
                module.execute(host);
                report.loaded.push(locator.clone());
            }
            Err(e) => {
                // Only the earliest failure is surfaced; the rest stay in the report.
                if report.failed.is_empty() {
                    log::error!("[Loader] {}", e);
                }
                report.failed.push(e);
            }
        }
    }

    log::info!(
        "[Loader] {}/{} topic modules loaded",
        report.loaded.len(),
        locators.len()
    );
    host.boot_navigation();
    report
}
