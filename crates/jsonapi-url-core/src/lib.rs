//! Parse JSON:API resource URLs into structured parameters.
//!
//! Two layers: [`url_model`] decomposes a raw URL into a pathname and a flat
//! query map, and [`params`] matches the pathname against the resource path
//! grammar and reads pagination, filter and sort groups from the query.

pub mod config;
pub mod error;
pub mod logging;
pub mod params;
pub mod url_model;

pub use config::{ParserConfig, PathMatch};
pub use error::ParseError;
pub use params::{
    parse_json_api_url, Filter, JsonApiUrlParams, JsonApiUrlParser, Order, Pagination,
    ResourcePath, Sort,
};
pub use url_model::{parse_url, ParsedUrl, QueryMap};
