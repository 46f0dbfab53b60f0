//! Request-scoped cookie access for Rust servers built on the [`http`] crate.
//!
//! # Overview
//!
//! `cookie_scope` hands each request a [`CookieJar`]: a scratch space that
//! exposes the cookies sent by the client and collects the cookies to be sent
//! back. It has support for:
//!
//! - Reading and writing cookies by name during a request, via [`CookieJar::get`] and [`CookieJar::put`]
//! - Signing cookie values to detect tampering, via [`CookieJar::put_signed`] and [`CookieJar::get_signed`]
//! - Wiring the jar into a request/response cycle, via [`wrap_cookies`] and [`wrap_cookies_assuming_parsed`]
//! - Parsing `Cookie` headers and rendering `Set-Cookie` headers, via [`RequestCookies`], [`ResponseCookies`] and [`Processor`]
//!
//! # Non-goals
//!
//! Cookie values are signed, never encrypted: signing guarantees integrity, not
//! confidentiality. Cookie attributes are not validated. There is no session
//! store: nothing outlives the request that created it.
//!
//! # Quickstart
//!
//! ```rust
//! use cookie_scope::{wrap_cookies, CookieJar, Processor, SigningKey};
//! use http::{header, Request, Response};
//!
//! // You'll load the key from *somewhere* in production, e.g. from a file,
//! // environment variable, or a secret management service.
//! let key = SigningKey::generate();
//!
//! let app = wrap_cookies(
//!     |_request: Request<()>, jar: &mut CookieJar| {
//!         // Plain cookie, visible to later reads in the same request.
//!         jar.put("theme", "dark");
//!         assert_eq!(jar.get("theme"), Some("dark"));
//!
//!         // Signed cookie: a `user__s` companion cookie carries the signature.
//!         jar.put_signed(&key, "user", "alice");
//!         assert_eq!(jar.get_signed(&key, "user"), Some("alice"));
//!
//!         Some(Response::new(()))
//!     },
//!     Processor::default(),
//! );
//!
//! let response = app(Request::new(())).unwrap();
//! assert_eq!(response.headers().get_all(header::SET_COOKIE).iter().count(), 3);
//! ```
//!
//! ## Credits
//!
//! Cookie parsing and `Set-Cookie` rendering are heavily inspired by the
//! [`cookie` crate](https://crates.io/crates/cookie) [Copyright (c) 2017 Sergio Benitez,
//! Copyright (c) 2014 Alex Crichton].
pub mod config;
mod cookie_value;
mod crypto;
mod encoding;
mod expiration;
mod jar;
mod middleware;
mod processor;
mod request_cookies;
mod response_cookies;
mod same_site;

pub use crate::expiration::*;
pub use crate::same_site::*;
pub use config::ProcessorConfig;
pub use cookie_value::{CookieAttributes, CookieValue};
pub use crypto::SigningKey;
pub use jar::{signed_name, CookieJar, SIGNATURE_SUFFIX};
pub use middleware::{parse_cookies, wrap_cookies, wrap_cookies_assuming_parsed};
pub use processor::Processor;
pub use request_cookies::RequestCookies;
pub use response_cookies::ResponseCookies;
pub use time;

/// Errors that can occur when parsing cookies.
pub mod errors {
    pub use crate::processor::DecodingError;
    pub use crate::request_cookies::{EmptyNameError, MissingPairError, ParseError};
}
