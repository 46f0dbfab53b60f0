use crate::config::ProcessorConfig;
use crate::encoding::{decode, encode};
use crate::CookieAttributes;
use std::borrow::Cow;

/// Transforms cookies before they are sent to the client, or after they have been parsed from an incoming request.
///
/// # Creating a `Processor`
///
/// A processor is created from a [`ProcessorConfig`] using the [`From`] trait.
///
/// ```rust
/// use cookie_scope::{Processor, ProcessorConfig};
///
/// let processor: Processor = ProcessorConfig::default().into();
/// ```
///
/// # Using a `Processor`
///
/// You need a `Processor` to invoke [`ResponseCookies::header_values`],
/// [`RequestCookies::parse_header`] and the [`parse_cookies`] middleware.
///
/// [`ResponseCookies::header_values`]: crate::ResponseCookies::header_values
/// [`RequestCookies::parse_header`]: crate::RequestCookies::parse_header
/// [`parse_cookies`]: crate::parse_cookies
#[derive(Debug, Clone)]
pub struct Processor {
    percent_encode: bool,
}

impl From<ProcessorConfig> for Processor {
    fn from(value: ProcessorConfig) -> Self {
        Processor {
            percent_encode: value.percent_encode,
        }
    }
}

impl Default for Processor {
    fn default() -> Self {
        ProcessorConfig::default().into()
    }
}

impl Processor {
    /// Render a cookie as a `Set-Cookie` header value.
    pub fn process_outgoing(&self, name: &str, cookie: &CookieAttributes) -> String {
        let (name, value) = if self.percent_encode {
            (encode(name), encode(cookie.value()))
        } else {
            (Cow::Borrowed(name), Cow::Borrowed(cookie.value()))
        };
        format!("{name}={value}{}", cookie.parameters())
    }

    /// Decode a name/value pair extracted from a `Cookie` header.
    pub fn process_incoming(
        &self,
        name: &str,
        value: &str,
    ) -> Result<(String, String), DecodingError> {
        if !self.percent_encode {
            return Ok((name.to_owned(), value.to_owned()));
        }
        let decoded_name = decode(name).map_err(|source| DecodingError {
            raw_value: name.to_owned(),
            source,
        })?;
        let decoded_value = decode(value).map_err(|e| DecodingError {
            raw_value: value.to_owned(),
            source: e.context(format!(
                "Failed to percent-decode the value of the `{decoded_name}` cookie"
            )),
        })?;
        Ok((decoded_name.into_owned(), decoded_value.into_owned()))
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{source}: `{raw_value}`")]
/// An error that occurred while decoding a percent-encoded cookie name or value.
///
/// This error is returned by [`Processor::process_incoming`].
pub struct DecodingError {
    pub(crate) raw_value: String,
    #[source]
    pub(crate) source: anyhow::Error,
}
