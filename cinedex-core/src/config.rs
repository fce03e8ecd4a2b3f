use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::{env, path::PathBuf, time::Duration};

/// Client settings: upstream hosts, request headers, and the optional
/// on-disk page cache.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Hostname HTML pages are fetched from.
    pub site: String,
    /// GraphQL endpoint serving person data.
    pub graph_endpoint: String,
    /// Accept-Language header sent with every request. Controls which
    /// localisation upstream serves.
    pub language: String,
    /// User-Agent header sent with every request.
    pub user_agent: String,
    /// Directory for the on-disk page cache. `None` disables it.
    pub cache_dir: Option<PathBuf>,
    /// How long a cached page stays fresh.
    pub cache_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: "www.imdb.com".into(),
            graph_endpoint: "https://api.graphql.imdb.com/".into(),
            language: "en-US,en;q=0.5".into(),
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:128.0) \
                         Gecko/20100101 Firefox/128.0"
                .into(),
            cache_dir: None,
            cache_ttl: Duration::from_secs(3600),
        }
    }
}

impl Config {
    /// Load configuration overrides from `CINEDEX_*` environment variables,
    /// falling back to defaults for anything unset.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut config = Config::default();

        if let Ok(site) = env::var("CINEDEX_SITE")
            && !site.trim().is_empty()
        {
            config.site = site.trim().to_owned();
        }

        if let Ok(endpoint) = env::var("CINEDEX_GRAPH_ENDPOINT")
            && !endpoint.trim().is_empty()
        {
            config.graph_endpoint = endpoint.trim().to_owned();
        }

        if let Ok(language) = env::var("CINEDEX_LANGUAGE")
            && !language.trim().is_empty()
        {
            config.language = language.trim().to_owned();
        }

        if let Ok(agent) = env::var("CINEDEX_USER_AGENT")
            && !agent.trim().is_empty()
        {
            config.user_agent = agent.trim().to_owned();
        }

        if let Ok(dir) = env::var("CINEDEX_CACHE_DIR")
            && !dir.trim().is_empty()
        {
            config.cache_dir = Some(PathBuf::from(dir.trim()));
        }

        if let Ok(ttl) = env::var("CINEDEX_CACHE_TTL_SECS")
            && !ttl.trim().is_empty()
        {
            let secs = ttl.trim().parse::<u64>().with_context(|| {
                format!("invalid CINEDEX_CACHE_TTL_SECS value {ttl:?}")
            })?;
            config.cache_ttl = Duration::from_secs(secs);
        }

        Ok(config)
    }
}
