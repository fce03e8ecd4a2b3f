use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::warn;

use crate::{
    error::Result,
    graph::{Connection, GraphClient},
};

/// Build the query document for a cursor-paginated name field.
///
/// `filter` is spliced verbatim after the pagination arguments, so it must
/// carry its own leading comma when present.
pub fn connection_query(
    query_name: &str,
    field: &str,
    node_fragment: &str,
    filter: &str,
) -> String {
    format!(
        r#"query {query_name}($id: ID!, $after: ID) {{
  name(id: $id) {{
    {field}(first: 9999, after: $after{filter}) {{
      edges {{
        node {{
          {node_fragment}
        }}
      }}
      pageInfo {{
        endCursor
        hasNextPage
      }}
    }}
  }}
}}"#
    )
}

/// Drain every page of a cursor-paginated name field, accumulating nodes.
///
/// Stops early with a warning when upstream repeats a cursor or omits one
/// while claiming more pages, so a misbehaving backend cannot loop us
/// forever.
pub async fn fetch_all_edges<T>(
    graph: &dyn GraphClient,
    query_name: &str,
    field: &str,
    node_fragment: &str,
    filter: &str,
    id: &str,
) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    let query = connection_query(query_name, field, node_fragment, filter);
    let mut nodes = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let variables = json!({ "id": id, "after": cursor });
        let mut data = graph.query(&query, query_name, variables).await?;

        let Some(value) = data.pointer_mut(&format!("/name/{field}")) else {
            break;
        };
        if value.is_null() {
            break;
        }
        let connection: Connection<T> = serde_json::from_value(value.take())?;

        nodes.extend(connection.edges.into_iter().filter_map(|edge| edge.node));

        let Some(page_info) = connection.page_info else {
            break;
        };
        if !page_info.has_next_page {
            break;
        }
        match page_info.end_cursor {
            Some(next) if cursor.as_deref() != Some(next.as_str()) => {
                cursor = Some(next);
            }
            Some(_) => {
                warn!(field, "pagination cursor did not advance, stopping");
                break;
            }
            None => {
                warn!(field, "pagination claims more pages but gave no cursor");
                break;
            }
        }
    }

    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_document_carries_field_and_filter() {
        let query = connection_query(
            "Credits",
            "credits",
            "title { id }",
            ", filter: { categories: [\"actor\"] }",
        );
        assert!(query.starts_with("query Credits($id: ID!, $after: ID)"));
        assert!(query.contains(
            "credits(first: 9999, after: $after, filter: { categories: [\"actor\"] })"
        ));
        assert!(query.contains("endCursor"));
        assert!(query.contains("hasNextPage"));
    }

    #[test]
    fn empty_filter_leaves_arguments_untouched() {
        let query = connection_query("AkaName", "akas", "text", "");
        assert!(query.contains("akas(first: 9999, after: $after)"));
    }
}
