//! Reference `encodeURI`: escapes everything except letters, digits and
//! `; , / ? : @ & = + $ - _ . ! ~ * ' ( ) #`.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

const ENCODE_URI_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

pub fn encode_uri(input: &str) -> String {
    utf8_percent_encode(input, ENCODE_URI_SET).to_string()
}
