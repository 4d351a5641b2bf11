//! Parse JSON:API resource URLs.
//!
//! ```
//! use jsonapi_url::{parse_json_api_url, Order};
//!
//! let params = parse_json_api_url(
//!     "https://abc.com/articles/12345/relationships/author?page[size]=10&sort=-createdAt",
//! )
//! .unwrap();
//! assert_eq!(params.resource_type, "articles");
//! assert_eq!(params.resource_id.as_deref(), Some("12345"));
//! assert_eq!(params.relationship_type.as_deref(), Some("author"));
//! assert_eq!(params.page_size, Some(10.0));
//! assert_eq!(params.sort.unwrap()[0].order, Order::Descending);
//! ```
//!
//! The implementation lives in `jsonapi-url-core`; this crate re-exports it.

pub use jsonapi_url_core::*;
