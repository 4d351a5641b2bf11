//! Error type for URL decomposition and parameter extraction.

use thiserror::Error;

use crate::url_model::DecodeError;

/// Failure to turn a URL into JSON:API parameters.
///
/// Only an unrecognizable resource path is a domain failure; the other two
/// variants surface what the URL decomposition layer rejects.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The normalized path does not start with a `/<type>` segment.
    #[error("url {url} is not a json:api url")]
    InvalidResourceUrl { url: String },

    /// Whole-URL percent-decoding failed.
    #[error("url {url} has malformed percent-encoding: {source}")]
    MalformedEncoding {
        url: String,
        #[source]
        source: DecodeError,
    },

    /// The URL parser rejected the (decoded) input.
    #[error("url {url} could not be parsed: {source}")]
    MalformedUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl ParseError {
    /// The URL as passed by the caller.
    pub fn url(&self) -> &str {
        match self {
            ParseError::InvalidResourceUrl { url }
            | ParseError::MalformedEncoding { url, .. }
            | ParseError::MalformedUrl { url, .. } => url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_resource_url_message_names_url() {
        let err = ParseError::InvalidResourceUrl {
            url: "https://abc.com/".to_string(),
        };
        assert_eq!(err.to_string(), "url https://abc.com/ is not a json:api url");
        assert_eq!(err.url(), "https://abc.com/");
    }

    #[test]
    fn malformed_encoding_exposes_source() {
        use std::error::Error as _;

        let err = ParseError::MalformedEncoding {
            url: "/a%zz".to_string(),
            source: DecodeError::InvalidEscape { offset: 2 },
        };
        assert!(err.to_string().contains("/a%zz"));
        assert!(err.source().is_some());
    }
}
