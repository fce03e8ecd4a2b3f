use std::fmt;

use async_trait::async_trait;
use reqwest::header::{ACCEPT_LANGUAGE, CONTENT_TYPE};
use serde_json::{Value, json};
use tracing::debug;
use url::Url;

use crate::{
    config::Config,
    error::{CinedexError, Result},
    graph::GraphClient,
};

/// Default [`GraphClient`] speaking to the public GraphQL endpoint.
pub struct HttpGraphClient {
    endpoint: Url,
    language: String,
    http: reqwest::Client,
}

impl fmt::Debug for HttpGraphClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpGraphClient")
            .field("endpoint", &self.endpoint.as_str())
            .finish()
    }
}

impl HttpGraphClient {
    pub fn new(config: &Config) -> Result<Self> {
        let endpoint = Url::parse(&config.graph_endpoint).map_err(|err| {
            CinedexError::Config(format!(
                "invalid graph endpoint {:?}: {err}",
                config.graph_endpoint
            ))
        })?;
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            endpoint,
            language: config.language.clone(),
            http,
        })
    }
}

#[async_trait]
impl GraphClient for HttpGraphClient {
    async fn query(
        &self,
        query: &str,
        operation: &str,
        variables: Value,
    ) -> Result<Value> {
        let payload = json!({
            "operationName": operation,
            "query": query,
            "variables": variables,
        });

        let response = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT_LANGUAGE, self.language.as_str())
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CinedexError::Graph(format!(
                "query {operation} failed with status {status}"
            )));
        }

        let mut envelope = response.json::<Value>().await?;
        if let Some(errors) = envelope.get("errors")
            && !errors.is_null()
        {
            debug!(operation, %errors, "graph response carried field errors");
        }

        Ok(envelope
            .get_mut("data")
            .map(Value::take)
            .unwrap_or(Value::Null))
    }
}
