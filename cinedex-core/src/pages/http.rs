use std::{
    fmt,
    path::PathBuf,
    sync::Arc,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use async_trait::async_trait;
use dashmap::DashMap;
use reqwest::{StatusCode, header::ACCEPT_LANGUAGE};
use tracing::{debug, warn};

use cinedex_model::TitleId;

use crate::{
    config::Config,
    error::{CinedexError, Result},
    pages::{PageClient, TitlePage},
};

/// Key-addressed page cache on disk with a freshness window.
///
/// Entries are stored under their request URL. Stale entries are left in
/// place for `cacache` garbage collection and simply skipped on read.
#[derive(Clone)]
pub struct DiskCache {
    root: PathBuf,
    ttl: Duration,
}

impl fmt::Debug for DiskCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiskCache").field("root", &self.root).finish()
    }
}

impl DiskCache {
    pub fn new(root: PathBuf, ttl: Duration) -> Self {
        Self { root, ttl }
    }

    /// Fetch a fresh entry. Missing and stale entries come back as `None`.
    pub async fn read(&self, key: &str) -> Result<Option<String>> {
        let meta = cacache::metadata(&self.root, key).await.map_err(|err| {
            CinedexError::Cache(format!("metadata lookup failed: {err}"))
        })?;
        let Some(meta) = meta else {
            return Ok(None);
        };
        if self.expired(meta.time) {
            return Ok(None);
        }

        let bytes = cacache::read(&self.root, key)
            .await
            .map_err(|err| CinedexError::Cache(format!("read failed: {err}")))?;
        let markup = String::from_utf8(bytes).map_err(|err| {
            CinedexError::Cache(format!("cached page is not utf-8: {err}"))
        })?;
        Ok(Some(markup))
    }

    pub async fn write(&self, key: &str, markup: &str) -> Result<()> {
        cacache::write(&self.root, key, markup.as_bytes())
            .await
            .map(|_| ())
            .map_err(|err| CinedexError::Cache(format!("write failed: {err}")))
    }

    fn expired(&self, stored_millis: u128) -> bool {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        now.saturating_sub(stored_millis) > self.ttl.as_millis()
    }
}

/// Default [`PageClient`]: fetches title pages over HTTP, memoizes them in
/// memory per page, and optionally persists them through a [`DiskCache`].
pub struct HttpPageClient {
    site: String,
    language: String,
    title: TitleId,
    http: reqwest::Client,
    cache: Option<DiskCache>,
    pages: DashMap<TitlePage, Option<Arc<str>>>,
}

impl fmt::Debug for HttpPageClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpPageClient")
            .field("site", &self.site)
            .field("title", &self.title)
            .finish()
    }
}

impl HttpPageClient {
    pub fn new(config: &Config, http: reqwest::Client, title: TitleId) -> Self {
        let cache = config
            .cache_dir
            .clone()
            .map(|dir| DiskCache::new(dir, config.cache_ttl));

        Self {
            site: config.site.clone(),
            language: config.language.clone(),
            title,
            http,
            cache,
            pages: DashMap::new(),
        }
    }

    fn page_url(&self, page: TitlePage) -> String {
        format!(
            "https://{}/title/tt{}{}",
            self.site,
            self.title.as_str(),
            page.url_suffix()
        )
    }

    async fn fetch(&self, url: &str) -> Result<Option<String>> {
        debug!(url, "fetching title page");
        let response = self
            .http
            .get(url)
            .header(ACCEPT_LANGUAGE, self.language.as_str())
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = response.error_for_status()?;
        Ok(Some(response.text().await?))
    }
}

#[async_trait]
impl PageClient for HttpPageClient {
    async fn page(&self, page: TitlePage) -> Result<Option<Arc<str>>> {
        if let Some(hit) = self.pages.get(&page) {
            return Ok(hit.clone());
        }

        let url = self.page_url(page);

        if let Some(cache) = &self.cache {
            match cache.read(&url).await {
                Ok(Some(markup)) => {
                    let markup: Arc<str> = markup.into();
                    self.pages.insert(page, Some(markup.clone()));
                    return Ok(Some(markup));
                }
                Ok(None) => {}
                Err(err) => debug!(%err, "page cache read skipped"),
            }
        }

        let fetched = self.fetch(&url).await?;
        if let Some(cache) = &self.cache
            && let Some(markup) = fetched.as_deref()
            && let Err(err) = cache.write(&url, markup).await
        {
            warn!(%err, "page cache write failed");
        }

        let markup = fetched.map(Arc::<str>::from);
        self.pages.insert(page, markup.clone());
        Ok(markup)
    }
}
