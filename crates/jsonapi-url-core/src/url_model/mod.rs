//! URL decomposition.
//!
//! Turns a raw URL string into its pathname and a flat query map, after
//! decoding the whole URL once when it carries percent escapes. Structural
//! parsing is delegated to the `url` crate.

mod decode;
mod query;

pub use decode::{decode_uri, DecodeError};

use decode::decode_url_path;
pub use query::QueryMap;

use percent_encoding::percent_decode_str;
use url::Url;

use crate::error::ParseError;

/// Base used to decompose input that has no scheme; never surfaced.
const RELATIVE_BASE: &str = "http://relative.invalid/";

/// A decomposed URL.
///
/// Network components are empty strings when absent (and always empty for
/// relative input). Only `pathname` and `query` feed parameter extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedUrl {
    pub href: String,
    /// Scheme with its trailing colon, e.g. `https:`.
    pub protocol: String,
    pub username: String,
    pub password: String,
    /// `username:password`, `username`, or empty.
    pub auth: String,
    /// Hostname plus `:port` when a non-default port is given.
    pub host: String,
    pub hostname: String,
    pub port: String,
    pub origin: String,
    /// Decoded path, including the leading `/` when present. Escapes of
    /// reserved characters such as `%2F` stay encoded.
    pub pathname: String,
    /// Raw query with its leading `?`, or empty.
    pub search: String,
    /// Fragment with its leading `#`, or empty.
    pub hash: String,
    pub query: QueryMap,
}

/// Decomposes `url` into a [`ParsedUrl`].
///
/// If `url` contains `%` it is first decoded as a whole with [`decode_uri`].
pub fn parse_url(url: &str) -> Result<ParsedUrl, ParseError> {
    let decoded = decode_uri(url).map_err(|source| ParseError::MalformedEncoding {
        url: url.to_string(),
        source,
    })?;

    let malformed = |source: url::ParseError| ParseError::MalformedUrl {
        url: url.to_string(),
        source,
    };

    let parsed = match Url::parse(&decoded) {
        Ok(parsed) => parsed,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let joined = Url::parse(RELATIVE_BASE)
                .and_then(|base| base.join(&decoded))
                .map_err(malformed)?;
            return Ok(relative_parts(decoded.into_owned(), &joined));
        }
        Err(source) => return Err(malformed(source)),
    };

    Ok(absolute_parts(&parsed))
}

fn absolute_parts(parsed: &Url) -> ParsedUrl {
    let username = decode_component(parsed.username());
    let password = parsed.password().map(decode_component).unwrap_or_default();
    let auth = match (username.is_empty(), password.is_empty()) {
        (true, true) => String::new(),
        (_, true) => username.clone(),
        _ => format!("{}:{}", username, password),
    };
    let hostname = parsed.host_str().unwrap_or_default().to_string();
    let port = parsed.port().map(|p| p.to_string()).unwrap_or_default();
    let host = if port.is_empty() {
        hostname.clone()
    } else {
        format!("{}:{}", hostname, port)
    };

    let result = ParsedUrl {
        href: parsed.as_str().to_string(),
        protocol: format!("{}:", parsed.scheme()),
        username,
        password,
        auth,
        host,
        hostname,
        port,
        origin: parsed.origin().ascii_serialization(),
        pathname: pathname(parsed.path()),
        search: prefixed('?', parsed.query()),
        hash: prefixed('#', parsed.fragment()),
        query: QueryMap::parse(parsed.query().unwrap_or_default()),
    };
    tracing::trace!(
        host = %result.host,
        pathname = %result.pathname,
        query_keys = result.query.len(),
        "decomposed url"
    );
    result
}

fn relative_parts(href: String, joined: &Url) -> ParsedUrl {
    let result = ParsedUrl {
        href,
        protocol: String::new(),
        username: String::new(),
        password: String::new(),
        auth: String::new(),
        host: String::new(),
        hostname: String::new(),
        port: String::new(),
        origin: String::new(),
        pathname: pathname(joined.path()),
        search: prefixed('?', joined.query()),
        hash: prefixed('#', joined.fragment()),
        query: QueryMap::parse(joined.query().unwrap_or_default()),
    };
    tracing::trace!(
        pathname = %result.pathname,
        query_keys = result.query.len(),
        "decomposed relative url"
    );
    result
}

/// Path as it read after whole-URL decoding; only the URL parser's own
/// escapes are undone.
fn pathname(path: &str) -> String {
    match decode_url_path(path) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => path.to_string(),
    }
}

/// Undoes the escaping the URL parser applies to userinfo text.
fn decode_component(s: &str) -> String {
    percent_decode_str(s).decode_utf8_lossy().into_owned()
}

fn prefixed(prefix: char, part: Option<&str>) -> String {
    part.map(|p| format!("{}{}", prefix, p)).unwrap_or_default()
}
