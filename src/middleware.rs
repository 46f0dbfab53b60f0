//! Handler wrappers that give each request its own [`CookieJar`].
//!
//! A handler wrapped with [`wrap_cookies`] (or [`wrap_cookies_assuming_parsed`])
//! receives the request together with a `&mut CookieJar`. When the handler
//! returns a response, the cookies it queued in the jar are merged into the
//! response's [`ResponseCookies`]. When it returns `None`, the queued cookies are
//! dropped.
//!
//! ```rust
//! use cookie_scope::{wrap_cookies, CookieJar, Processor};
//! use http::{header, Request, Response};
//!
//! let app = wrap_cookies(
//!     |_request: Request<()>, jar: &mut CookieJar| {
//!         let visits: u32 = jar.get_or("visits", "0").parse().unwrap_or(0);
//!         jar.put("visits", (visits + 1).to_string());
//!         Some(Response::new(()))
//!     },
//!     Processor::default(),
//! );
//!
//! let request = Request::builder()
//!     .header(header::COOKIE, "visits=41")
//!     .body(())
//!     .unwrap();
//! let response = app(request).unwrap();
//! assert_eq!(response.headers()[header::SET_COOKIE], "visits=42; Path=/");
//! ```
use http::header::{COOKIE, SET_COOKIE};
use http::{HeaderMap, HeaderValue, Request, Response};

use crate::{CookieJar, Processor, RequestCookies, ResponseCookies};

/// Wraps `handler` with the full cookie pipeline.
///
/// `Cookie` headers are parsed before the handler runs and the cookies queued
/// in the jar are sent back as `Set-Cookie` headers. Use this as the outermost
/// cookie middleware; if cookies are already parsed earlier in your pipeline,
/// use [`wrap_cookies_assuming_parsed`] instead.
pub fn wrap_cookies<H, B, R>(
    handler: H,
    processor: Processor,
) -> impl Fn(Request<B>) -> Option<Response<R>>
where
    H: Fn(Request<B>, &mut CookieJar) -> Option<Response<R>>,
{
    parse_cookies(wrap_cookies_assuming_parsed(handler), processor)
}

/// Wraps `handler` assuming an earlier layer (e.g. [`parse_cookies`]) already
/// stored the request cookies as a [`RequestCookies`] extension.
///
/// Requests without that extension are treated as carrying no cookies.
/// Queued cookies are merged into the response's [`ResponseCookies`]
/// extension, overriding cookies with the same name; the extension is created
/// if the handler didn't set one.
pub fn wrap_cookies_assuming_parsed<H, B, R>(
    handler: H,
) -> impl Fn(Request<B>) -> Option<Response<R>>
where
    H: Fn(Request<B>, &mut CookieJar) -> Option<Response<R>>,
{
    move |request: Request<B>| {
        let incoming = request
            .extensions()
            .get::<RequestCookies>()
            .cloned()
            .unwrap_or_default();
        let mut jar = CookieJar::new(incoming);

        let mut response = handler(request, &mut jar)?;

        let outgoing = jar.into_outgoing();
        if !outgoing.is_empty() {
            let extensions = response.extensions_mut();
            match extensions.get_mut::<ResponseCookies>() {
                Some(cookies) => cookies.extend(outgoing),
                None => {
                    extensions.insert(outgoing);
                }
            }
        }
        Some(response)
    }
}

/// The raw cookie layer.
///
/// Before `handler` runs, every `Cookie` header is parsed into a
/// [`RequestCookies`] extension on the request. Malformed fragments are skipped.
/// After `handler` returns a response, its [`ResponseCookies`] extension (if
/// any) is removed and rendered as `Set-Cookie` headers.
pub fn parse_cookies<H, B, R>(
    handler: H,
    processor: Processor,
) -> impl Fn(Request<B>) -> Option<Response<R>>
where
    H: Fn(Request<B>) -> Option<Response<R>>,
{
    move |mut request: Request<B>| {
        let cookies = request_cookies(request.headers(), &processor);
        request.extensions_mut().insert(cookies);

        let mut response = handler(request)?;

        if let Some(cookies) = response.extensions_mut().remove::<ResponseCookies>() {
            append_set_cookie(response.headers_mut(), &cookies, &processor);
        }
        Some(response)
    }
}

fn request_cookies(headers: &HeaderMap, processor: &Processor) -> RequestCookies {
    let mut cookies = RequestCookies::new();
    for value in headers.get_all(COOKIE) {
        let header = match std::str::from_utf8(value.as_bytes()) {
            Ok(header) => header,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring a `Cookie` header that isn't valid UTF-8");
                continue;
            }
        };
        let skipped = cookies.extend_from_header_lossy(header, processor);
        if skipped > 0 {
            tracing::debug!(skipped, "Dropped malformed fragments from a `Cookie` header");
        }
    }
    cookies
}

fn append_set_cookie(headers: &mut HeaderMap, cookies: &ResponseCookies, processor: &Processor) {
    for value in cookies.header_values(processor) {
        match HeaderValue::try_from(value) {
            Ok(value) => {
                headers.append(SET_COOKIE, value);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Dropping a cookie that can't be encoded as a `Set-Cookie` header");
            }
        }
    }
}
