//! Client facade wiring resolvers to their default collaborators.

use std::{fmt, sync::Arc};

use cinedex_model::{MovieType, NameId, TitleFacts, TitleId};

use crate::{
    config::Config,
    error::Result,
    graph::{GraphClient, HttpGraphClient},
    pages::HttpPageClient,
    person::Person,
    title::Title,
};

/// Shared entry point. Cheap to clone collaborators from; hand out one
/// resolver per entity you want to read.
pub struct Cinedex {
    config: Config,
    graph: Arc<dyn GraphClient>,
    http: reqwest::Client,
}

impl fmt::Debug for Cinedex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cinedex")
            .field("config", &self.config)
            .finish()
    }
}

impl Cinedex {
    /// Client over the default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Result<Self> {
        let graph = HttpGraphClient::new(&config)?;
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self {
            config,
            graph: Arc::new(graph),
            http,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolver for one person.
    pub fn person(&self, id: NameId) -> Person {
        Person::new(id, Arc::clone(&self.graph))
    }

    /// Resolver for one title.
    pub fn title(&self, id: TitleId) -> Title {
        Title::new(id.clone(), self.config.site.clone(), self.page_client(id))
    }

    /// Resolver for a title already described by a search listing. The
    /// seeded banner facts keep the header accessors off the network; a
    /// bare year gets the no-range end-year sentinel `"0"`.
    pub fn title_from_search(
        &self,
        id: TitleId,
        title: impl Into<String>,
        year: impl Into<String>,
        movie_type: Option<MovieType>,
    ) -> Title {
        let facts = TitleFacts {
            title: title.into(),
            year: year.into(),
            end_year: "0".to_owned(),
            movie_type,
        };
        Title::from_search_result(
            id.clone(),
            self.config.site.clone(),
            self.page_client(id),
            facts,
        )
    }

    fn page_client(&self, id: TitleId) -> Arc<HttpPageClient> {
        Arc::new(HttpPageClient::new(&self.config, self.http.clone(), id))
    }
}
