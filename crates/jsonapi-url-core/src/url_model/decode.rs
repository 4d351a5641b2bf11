//! Whole-URL percent-decoding with `decodeURI` rules.

use std::borrow::Cow;

use thiserror::Error;

/// Characters whose escapes are kept as-is, so the URL structure survives decoding.
const URI_RESERVED: &[u8] = b";/?:@&=+$,#";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// `%` not followed by two hex digits.
    #[error("malformed escape sequence at byte {offset}")]
    InvalidEscape { offset: usize },
    /// Escapes at `offset` do not form a valid UTF-8 sequence.
    #[error("escape sequence at byte {offset} is not valid UTF-8")]
    InvalidUtf8 { offset: usize },
}

/// ASCII characters the `url` crate escapes when serializing a path.
const URL_PATH_ESCAPED: &[u8] = b" \"#<>?`{}";

/// Decodes every escape in `input` except those standing for a URI-reserved
/// character (`; / ? : @ & = + $ , #`).
///
/// Multi-byte escapes must form valid UTF-8. Input without `%` is returned
/// borrowed.
pub fn decode_uri(input: &str) -> Result<Cow<'_, str>, DecodeError> {
    decode_except(input, |b| URI_RESERVED.contains(&b))
}

/// Undoes only the escapes the `url` crate adds to a path it serializes.
///
/// Escapes already present in the decoded input (`%2F`, `%25`, ...) are kept,
/// so a path is never decoded twice.
pub(crate) fn decode_url_path(path: &str) -> Result<Cow<'_, str>, DecodeError> {
    decode_except(path, |b| {
        !(b < 0x20 || b == 0x7f || URL_PATH_ESCAPED.contains(&b))
    })
}

/// Decodes escapes, leaving `%XX` as-is when the ASCII byte it stands for
/// satisfies `keep`. Non-ASCII escapes are always decoded.
fn decode_except(input: &str, keep: impl Fn(u8) -> bool) -> Result<Cow<'_, str>, DecodeError> {
    if !input.contains('%') {
        return Ok(Cow::Borrowed(input));
    }

    let bytes = input.as_bytes();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'%' {
            let next = input[i..].find('%').map_or(bytes.len(), |n| i + n);
            out.push_str(&input[i..next]);
            i = next;
            continue;
        }

        let lead = escaped_byte(bytes, i)?;
        if lead < 0x80 {
            if keep(lead) {
                out.push_str(&input[i..i + 3]);
            } else {
                out.push(char::from(lead));
            }
            i += 3;
            continue;
        }

        let width = utf8_width(lead).ok_or(DecodeError::InvalidUtf8 { offset: i })?;
        let mut buf = [0u8; 4];
        buf[0] = lead;
        for (k, slot) in buf.iter_mut().enumerate().take(width).skip(1) {
            let at = i + 3 * k;
            if bytes.get(at) != Some(&b'%') {
                return Err(DecodeError::InvalidUtf8 { offset: i });
            }
            *slot = escaped_byte(bytes, at)?;
        }
        let decoded = std::str::from_utf8(&buf[..width])
            .map_err(|_| DecodeError::InvalidUtf8 { offset: i })?;
        out.push_str(decoded);
        i += 3 * width;
    }

    Ok(Cow::Owned(out))
}

/// Reads the byte encoded by the `%XX` escape starting at `at`.
fn escaped_byte(bytes: &[u8], at: usize) -> Result<u8, DecodeError> {
    let high = bytes.get(at + 1).copied().and_then(hex_digit);
    let low = bytes.get(at + 2).copied().and_then(hex_digit);
    match (high, low) {
        (Some(high), Some(low)) => Ok((high << 4) | low),
        _ => Err(DecodeError::InvalidEscape { offset: at }),
    }
}

fn utf8_width(lead: u8) -> Option<usize> {
    match lead {
        0xC0..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF7 => Some(4),
        _ => None,
    }
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_percent_is_borrowed() {
        let r = decode_uri("https://abc.com/articles?sort=title").unwrap();
        assert!(matches!(r, Cow::Borrowed(_)));
    }

    #[test]
    fn decodes_unreserved_escapes() {
        assert_eq!(
            decode_uri("/articles?filter%5Btitle%5D=hello%20world").unwrap(),
            "/articles?filter[title]=hello world"
        );
        assert_eq!(decode_uri("a%3Eb%3eC").unwrap(), "a>b>C");
    }

    #[test]
    fn keeps_reserved_escapes() {
        assert_eq!(
            decode_uri("/a?x=1%262&y=%3D%2F%23").unwrap(),
            "/a?x=1%262&y=%3D%2F%23"
        );
    }

    #[test]
    fn decodes_multibyte_utf8() {
        assert_eq!(decode_uri("caf%C3%A9").unwrap(), "café");
        assert_eq!(decode_uri("%E2%82%AC%F0%9F%98%80").unwrap(), "€😀");
    }

    #[test]
    fn double_encoded_percent_decodes_once() {
        assert_eq!(decode_uri("100%2525").unwrap(), "100%25");
    }

    #[test]
    fn url_path_keeps_input_escapes() {
        assert_eq!(decode_url_path("/a%20b/caf%C3%A9").unwrap(), "/a b/café");
        assert_eq!(decode_url_path("/a%22%3C%3E%60%7B%7D").unwrap(), "/a\"<>`{}");
        assert_eq!(decode_url_path("/articles%2F1").unwrap(), "/articles%2F1");
        assert_eq!(decode_url_path("/100%25/%41").unwrap(), "/100%25/%41");
    }

    #[test]
    fn malformed_escape_is_error() {
        assert_eq!(
            decode_uri("/a%zz").unwrap_err(),
            DecodeError::InvalidEscape { offset: 2 }
        );
        assert_eq!(
            decode_uri("/a%4").unwrap_err(),
            DecodeError::InvalidEscape { offset: 2 }
        );
        assert_eq!(
            decode_uri("%").unwrap_err(),
            DecodeError::InvalidEscape { offset: 0 }
        );
    }

    #[test]
    fn invalid_utf8_is_error() {
        // Lone continuation byte.
        assert_eq!(
            decode_uri("%80").unwrap_err(),
            DecodeError::InvalidUtf8 { offset: 0 }
        );
        // Truncated two-byte sequence.
        assert_eq!(
            decode_uri("x%C3y").unwrap_err(),
            DecodeError::InvalidUtf8 { offset: 1 }
        );
        // Overlong encoding of '/'.
        assert_eq!(
            decode_uri("%C0%AF").unwrap_err(),
            DecodeError::InvalidUtf8 { offset: 0 }
        );
    }
}
