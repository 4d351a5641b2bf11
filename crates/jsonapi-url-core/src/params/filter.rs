//! `filter[<field>]=<predicate>` query parameters.

use serde::{Deserialize, Serialize};

use crate::url_model::QueryMap;

const FILTER_PREFIX: &str = "filter[";

/// A per-field filter whose predicate is kept in its textual form.
///
/// The parser attaches no meaning to `predicate_string` (`>1234`, `a..b`,
/// plain values are all passed through).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    pub field_name: String,
    pub predicate_string: String,
}

/// Collects one [`Filter`] per `filter[...]` key, in key order.
///
/// Keys with an empty or unterminated bracket are skipped. Returns `None`
/// rather than an empty list when no filter was found.
pub fn parse_filters(query: &QueryMap) -> Option<Vec<Filter>> {
    let filters: Vec<Filter> = query
        .iter()
        .filter(|(key, _)| key.starts_with(FILTER_PREFIX))
        .filter_map(|(key, value)| match bracketed(key) {
            Some(field_name) => Some(Filter {
                field_name: field_name.to_string(),
                predicate_string: value.to_string(),
            }),
            None => {
                tracing::trace!(key, "skipping malformed filter key");
                None
            }
        })
        .collect();

    (!filters.is_empty()).then_some(filters)
}

/// Text between the first `[` and the first `]`, if non-empty.
fn bracketed(key: &str) -> Option<&str> {
    let start = key.find('[')?;
    let end = key.find(']')?;
    (end > start + 1).then(|| &key[start + 1..end])
}
