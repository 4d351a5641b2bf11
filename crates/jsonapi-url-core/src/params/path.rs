//! Resource path grammar: `/<type>[/<id>[/relationships/<rel>]]`.

use crate::config::{ParserConfig, PathMatch};

/// Resource identity read from the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePath {
    pub resource_type: String,
    pub resource_id: Option<String>,
    pub relationship_type: Option<String>,
}

/// Ensures a leading `/` and strips one trailing `/` (except for the root path).
pub fn normalize_pathname(pathname: &str) -> String {
    let mut norm = if pathname.starts_with('/') {
        pathname.to_string()
    } else {
        format!("/{}", pathname)
    };
    if norm.len() > 1 && norm.ends_with('/') {
        norm.pop();
    }
    norm
}

/// Matches `pathname` against the resource grammar, segment by segment.
///
/// Each `<word>` is a run of `[A-Za-z0-9_]`; a segment only needs to start with
/// one. A deeper group is read only when the previous word ended its segment.
/// In [`PathMatch::Prefix`] mode whatever follows the last matched word is
/// ignored; in [`PathMatch::Exact`] mode it makes the match fail.
///
/// Returns `None` when the path does not start with a word segment.
pub fn match_resource_path(pathname: &str, config: &ParserConfig) -> Option<ResourcePath> {
    let normalized = normalize_pathname(pathname);

    let (resource_type, mut rest) = slash_word(&normalized)?;
    let mut matched = ResourcePath {
        resource_type: resource_type.to_string(),
        resource_id: None,
        relationship_type: None,
    };

    if let Some((resource_id, after_id)) = slash_word(rest) {
        matched.resource_id = Some(resource_id.to_string());
        rest = after_id;

        let relationship = rest
            .strip_prefix('/')
            .and_then(|r| r.strip_prefix(config.relationships_keyword.as_str()))
            .and_then(slash_word);
        if let Some((relationship_type, after_rel)) = relationship {
            matched.relationship_type = Some(relationship_type.to_string());
            rest = after_rel;
        }
    }

    if config.path_match == PathMatch::Exact && !rest.is_empty() {
        tracing::trace!(pathname = %normalized, unmatched = %rest, "path has trailing segments");
        return None;
    }
    Some(matched)
}

/// Consumes `/<word>` from the front of `input`, returning the word and the remainder.
fn slash_word(input: &str) -> Option<(&str, &str)> {
    let after = input.strip_prefix('/')?;
    let end = after.find(|c: char| !is_word_char(c)).unwrap_or(after.len());
    if end == 0 {
        return None;
    }
    Some(after.split_at(end))
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
