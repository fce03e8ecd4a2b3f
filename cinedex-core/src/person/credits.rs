use cinedex_model::{CreditCategory, CreditEntry, CreditList, TitleId};
use tracing::warn;

use super::dto::CreditNode;

/// Bucket raw credit nodes into the fixed category list.
///
/// Every category appears in the result even when it stays empty. Nodes
/// whose category id falls outside the closed mapping are skipped with a
/// warning, so an upstream addition shows up in logs instead of vanishing
/// silently.
pub(super) fn bucket_credits(nodes: Vec<CreditNode>) -> CreditList {
    let mut list = CreditList::new();
    for node in nodes {
        let Some(category_id) =
            node.category.as_ref().and_then(|c| c.id.as_deref())
        else {
            continue;
        };
        let Some(category) = CreditCategory::from_upstream_id(category_id)
        else {
            warn!(category_id, "unmapped credit category, skipping entry");
            continue;
        };
        let Some(title) = node.title else {
            continue;
        };

        list.push(
            category,
            CreditEntry {
                title_id: title
                    .id
                    .as_deref()
                    .and_then(TitleId::extract),
                title: title
                    .title_text
                    .and_then(|t| t.text)
                    .unwrap_or_default(),
                title_type: title.title_type.and_then(|t| t.text),
                start_year: title.release_year.as_ref().and_then(|y| y.year),
                end_year: title.release_year.as_ref().and_then(|y| y.end_year),
                characters: node
                    .characters
                    .into_iter()
                    .filter_map(|c| c.name)
                    .collect(),
                jobs: node.jobs.into_iter().filter_map(|j| j.text).collect(),
            },
        );
    }
    list
}
