use std::borrow::Cow;

use anyhow::Context;
use percent_encoding::{percent_decode_str, AsciiSet, CONTROLS};

/// Everything outside of RFC 6265 `cookie-octet`, plus `%` so that encoding is reversible.
///
/// https://www.rfc-editor.org/rfc/rfc6265#section-4.1.1
const COOKIE_OCTETS: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b'(')
    .add(b')')
    .add(b',')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'{')
    .add(b'}');

/// Percent-encode a cookie name or value.
pub(crate) fn encode(string: &str) -> Cow<'_, str> {
    percent_encoding::utf8_percent_encode(string, COOKIE_OCTETS).into()
}

/// Percent-decode a cookie name or value received from a client.
pub(crate) fn decode(string: &str) -> Result<Cow<'_, str>, anyhow::Error> {
    percent_decode_str(string)
        .decode_utf8()
        .context("The percent-decoded bytes are not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::{decode, encode};

    #[test]
    fn separators_are_escaped() {
        assert_eq!(encode("a b;c=d"), "a%20b%3Bc%3Dd");
        assert_eq!(encode("plain-value_1.2"), "plain-value_1.2");
    }

    #[test]
    fn decode_reverses_encode() {
        let raw = "a bunch of % very special ! # characters ;";
        assert_eq!(decode(&encode(raw)).unwrap(), raw);
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        assert!(decode("%F1%F2%F3%C0%C1%C2").is_err());
    }
}
