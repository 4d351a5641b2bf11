//! JSON:API parameter extraction.
//!
//! Reads the resource identity from the pathname and the pagination, filter
//! and sort groups from the query map produced by [`crate::url_model`].

mod filter;
mod page;
mod path;
mod sort;

pub use filter::{parse_filters, Filter};
pub use page::{parse_pagination, to_number, Pagination};
pub use path::{match_resource_path, normalize_pathname, ResourcePath};
pub use sort::{parse_sort, Order, Sort};

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::url_model::{parse_url, ParsedUrl};

/// Parameters addressed by a JSON:API URL.
///
/// Optional fields are `None` when the URL does not carry them and are left
/// out of the serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonApiUrlParams {
    pub resource_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationship_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<Vec<Sort>>,
}

impl JsonApiUrlParams {
    pub fn resource_path(&self) -> ResourcePath {
        ResourcePath {
            resource_type: self.resource_type.clone(),
            resource_id: self.resource_id.clone(),
            relationship_type: self.relationship_type.clone(),
        }
    }

    pub fn pagination(&self) -> Pagination {
        Pagination {
            page_number: self.page_number,
            page_size: self.page_size,
        }
    }
}

impl FromStr for JsonApiUrlParams {
    type Err = ParseError;

    fn from_str(url: &str) -> Result<Self, Self::Err> {
        parse_json_api_url(url)
    }
}

/// Parser holding a [`ParserConfig`]; cheap to share between threads.
#[derive(Debug, Clone, Default)]
pub struct JsonApiUrlParser {
    config: ParserConfig,
}

impl JsonApiUrlParser {
    /// Builds a parser after checking `config` with [`ParserConfig::validate`].
    pub fn new(config: ParserConfig) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses `url` into [`JsonApiUrlParams`].
    ///
    /// Fails only when the URL cannot be decomposed or its path does not
    /// start with a `/<type>` segment. Irregular query parameters are dropped
    /// or passed through, never rejected.
    pub fn parse(&self, url: &str) -> Result<JsonApiUrlParams, ParseError> {
        let ParsedUrl {
            pathname, query, ..
        } = parse_url(url)?;

        let ResourcePath {
            resource_type,
            resource_id,
            relationship_type,
        } = match_resource_path(&pathname, &self.config).ok_or_else(|| {
            ParseError::InvalidResourceUrl {
                url: url.to_string(),
            }
        })?;
        let Pagination {
            page_number,
            page_size,
        } = parse_pagination(&query);

        let params = JsonApiUrlParams {
            resource_type,
            resource_id,
            relationship_type,
            page_number,
            page_size,
            filters: parse_filters(&query),
            sort: parse_sort(&query),
        };

        tracing::debug!(
            resource_type = %params.resource_type,
            resource_id = ?params.resource_id,
            relationship_type = ?params.relationship_type,
            filters = params.filters.as_ref().map_or(0, Vec::len),
            sort_fields = params.sort.as_ref().map_or(0, Vec::len),
            "parsed json:api url"
        );
        Ok(params)
    }
}

/// Parses `url` with the default (lenient) configuration.
pub fn parse_json_api_url(url: &str) -> Result<JsonApiUrlParams, ParseError> {
    JsonApiUrlParser::default().parse(url)
}
