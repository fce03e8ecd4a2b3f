pub mod http;
pub mod paginate;

pub use http::HttpGraphClient;

use crate::error::Result;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

/// Transport seam for the GraphQL backend.
///
/// `query` returns the decoded `data` subtree of the response envelope.
/// Transport and protocol failures are errors; field-level errors inside the
/// envelope are logged and otherwise ignored so partial data still flows.
#[async_trait]
pub trait GraphClient: Send + Sync {
    async fn query(
        &self,
        query: &str,
        operation: &str,
        variables: Value,
    ) -> Result<Value>;
}

/// Cursor-paginated connection shared by every list-shaped query.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Connection<T> {
    #[serde(default)]
    pub edges: Vec<Edge<T>>,
    #[serde(default)]
    pub page_info: Option<PageInfo>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self {
            edges: Vec::new(),
            page_info: None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Edge<T> {
    #[serde(default)]
    pub node: Option<T>,
}

impl<T> Default for Edge<T> {
    fn default() -> Self {
        Self { node: None }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    #[serde(default)]
    pub end_cursor: Option<String>,
    #[serde(default)]
    pub has_next_page: bool,
}
