//! `page[number]` / `page[size]` query parameters.

use crate::url_model::QueryMap;

const PAGE_PREFIX: &str = "page[";
const PAGE_NUMBER_KEY: &str = "page[number]";
const PAGE_SIZE_KEY: &str = "page[size]";

/// Requested result window. Fields are `None` when their key is absent.
///
/// A value that is not numeric is kept as `NaN` rather than dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pagination {
    pub page_number: Option<f64>,
    pub page_size: Option<f64>,
}

impl Pagination {
    pub fn is_empty(&self) -> bool {
        self.page_number.is_none() && self.page_size.is_none()
    }
}

pub fn parse_pagination(query: &QueryMap) -> Pagination {
    let mut result = Pagination::default();
    for (key, value) in query.iter() {
        if !key.starts_with(PAGE_PREFIX) {
            continue;
        }
        match key {
            PAGE_SIZE_KEY => result.page_size = Some(to_number(value)),
            PAGE_NUMBER_KEY => result.page_number = Some(to_number(value)),
            _ => tracing::trace!(key, "ignoring unknown pagination key"),
        }
    }
    result
}

/// Numeric coercion with the rules of a JavaScript unary `+`.
///
/// Surrounding whitespace is ignored and an empty string is `0`. Accepts
/// decimal and exponent notation, `0x`/`0o`/`0b` integers and `Infinity`.
/// Anything else is `NaN`.
pub fn to_number(value: &str) -> f64 {
    let trimmed = value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if trimmed.is_empty() {
        return 0.0;
    }
    if let Some(n) = radix_literal(trimmed) {
        return n;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    if is_decimal_literal(trimmed) {
        trimmed.parse().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

/// `0x1F`, `0o17`, `0b101`; `None` if `s` has no radix prefix.
fn radix_literal(s: &str) -> Option<f64> {
    let radix = match s.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &s[2..];
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(f64::NAN);
    }
    Some(digits.chars().fold(0.0, |acc, c| {
        acc * f64::from(radix) + f64::from(c.to_digit(radix).unwrap_or(0))
    }))
}

/// Optional sign, digits with an optional fraction, optional exponent.
fn is_decimal_literal(s: &str) -> bool {
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    let body = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
    let (mantissa, exponent) = match body.find(|c: char| c == 'e' || c == 'E') {
        Some(i) => (&body[..i], Some(&body[i + 1..])),
        None => (body, None),
    };
    let (int, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let mantissa_ok =
        !(int.is_empty() && frac.is_empty()) && all_digits(int) && all_digits(frac);
    let exponent_ok = exponent.map_or(true, |e| {
        let e = e.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(e);
        !e.is_empty() && all_digits(e)
    });
    mantissa_ok && exponent_ok
}
