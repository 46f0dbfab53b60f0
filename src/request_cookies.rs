use std::collections::HashMap;

use crate::processor::{DecodingError, Processor};

#[derive(Default, Debug, Clone, PartialEq, Eq)]
/// The cookies attached to an HTTP request using the `Cookie` header.
///
/// When the same name appears more than once, the first value wins: that's the
/// one the browser considers the most specific.
pub struct RequestCookies {
    cookies: HashMap<String, String>,
}

impl RequestCookies {
    /// Creates a new, empty [`RequestCookies`] map.
    pub fn new() -> RequestCookies {
        Default::default()
    }

    /// Inserts a cookie, unless a cookie with the same name is already present.
    ///
    /// Returns `true` if the cookie was inserted.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cookie_scope::RequestCookies;
    ///
    /// let mut cookies = RequestCookies::new();
    /// assert!(cookies.insert("name", "value1"));
    /// assert!(!cookies.insert("name", "value2"));
    /// assert_eq!(cookies.get("name"), Some("value1"));
    /// ```
    pub fn insert<N, V>(&mut self, name: N, value: V) -> bool
    where
        N: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        if self.cookies.contains_key(&name) {
            return false;
        }
        self.cookies.insert(name, value.into());
        true
    }

    /// Get a cookie value by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }

    /// Iterate over all `(name, value)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cookies.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    /// Parse a `Cookie` header value into a [`RequestCookies`] map.
    ///
    /// ```rust
    /// use cookie_scope::{Processor, RequestCookies};
    ///
    /// let processor = Processor::default();
    /// let cookies = RequestCookies::parse_header("session=abc123; theme=dark%20blue", &processor).unwrap();
    /// assert_eq!(cookies.get("session"), Some("abc123"));
    /// assert_eq!(cookies.get("theme"), Some("dark blue"));
    /// ```
    pub fn parse_header(header: &str, processor: &Processor) -> Result<RequestCookies, ParseError> {
        let mut cookies = RequestCookies::new();
        cookies.extend_from_header(header, processor)?;
        Ok(cookies)
    }

    /// Parse a `Cookie` header value and add its cookies to the existing map.
    ///
    /// Parsing stops at the first malformed fragment.
    pub fn extend_from_header(
        &mut self,
        header: &str,
        processor: &Processor,
    ) -> Result<(), ParseError> {
        for fragment in header.split(';') {
            if let Some((name, value)) = parse_fragment(fragment, processor)? {
                self.insert(name, value);
            }
        }
        Ok(())
    }

    /// Like [`RequestCookies::extend_from_header()`], but malformed fragments are
    /// skipped instead of aborting the whole header.
    ///
    /// Returns the number of fragments that were skipped.
    ///
    /// ```rust
    /// use cookie_scope::{Processor, RequestCookies};
    ///
    /// let mut cookies = RequestCookies::new();
    /// let skipped = cookies.extend_from_header_lossy("a=1; garbage; =v; b=2", &Processor::default());
    /// assert_eq!(skipped, 2);
    /// assert_eq!(cookies.get("a"), Some("1"));
    /// assert_eq!(cookies.get("b"), Some("2"));
    /// ```
    pub fn extend_from_header_lossy(&mut self, header: &str, processor: &Processor) -> usize {
        let mut skipped = 0;
        for fragment in header.split(';') {
            match parse_fragment(fragment, processor) {
                Ok(Some((name, value))) => {
                    self.insert(name, value);
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::debug!(error = %e, "Skipping a malformed fragment in the `Cookie` header");
                    skipped += 1;
                }
            }
        }
        skipped
    }
}

/// Parse a single `name=value` fragment.
///
/// Returns `Ok(None)` for empty (or whitespace-only) fragments.
fn parse_fragment(
    fragment: &str,
    processor: &Processor,
) -> Result<Option<(String, String)>, ParseError> {
    if fragment.chars().all(char::is_whitespace) {
        return Ok(None);
    }

    let (name, value) = match fragment.split_once('=') {
        Some((name, value)) => (name.trim(), value.trim()),
        None => {
            return Err(ParseError::MissingPair(MissingPairError {
                fragment: fragment.to_string(),
            }))
        }
    };

    if name.is_empty() {
        return Err(ParseError::EmptyName(EmptyNameError {
            value: value.to_string(),
        }));
    }

    let pair = processor.process_incoming(name, value)?;
    Ok(Some(pair))
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
/// The error returned by [`RequestCookies::parse_header()`].
pub enum ParseError {
    #[error("Failed to parse cookies out of a header value")]
    MissingPair(#[source] MissingPairError),
    #[error("Failed to parse cookies out of a header value")]
    EmptyName(#[source] EmptyNameError),
    #[error("Failed to parse cookies out of a header value")]
    Decoding(#[from] DecodingError),
}

#[derive(Debug, thiserror::Error)]
#[error("Expected a name-value pair, but no `=` was found in `{fragment}`")]
/// An error that occurs when parsing a fragment of a `Cookie` header value
/// that doesn't contain a name-value separator (`=`).
pub struct MissingPairError {
    fragment: String,
}

#[derive(Debug, thiserror::Error)]
#[error("The name of a cookie cannot be empty, but found an empty name with `{value}` as value")]
/// An error that occurs when parsing a fragment of a `Cookie` header value
/// that contains an empty name (e.g. `=value`).
pub struct EmptyNameError {
    value: String,
}
