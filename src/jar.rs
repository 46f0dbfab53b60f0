use crate::{CookieAttributes, CookieValue, RequestCookies, ResponseCookies, SigningKey};

/// The suffix appended to a cookie's name to get the name of its signature cookie.
pub const SIGNATURE_SUFFIX: &str = "__s";

/// The name of the cookie carrying the signature of the cookie named `name`.
///
/// ```rust
/// use cookie_scope::signed_name;
///
/// assert_eq!(signed_name("session"), "session__s");
/// ```
pub fn signed_name<N: AsRef<str>>(name: N) -> String {
    let name = name.as_ref();
    let mut signed = String::with_capacity(name.len() + SIGNATURE_SUFFIX.len());
    signed.push_str(name);
    signed.push_str(SIGNATURE_SUFFIX);
    signed
}

/// Request-scoped cookie state.
///
/// A `CookieJar` holds the cookies that came in with the request and
/// accumulates the cookies to be set on the response. One is created for each
/// request by [`wrap_cookies`] (or [`wrap_cookies_assuming_parsed`]) and handed
/// to the handler; nothing is shared with other requests.
///
/// Names can be anything that implements `AsRef<str>`, which lets you use an
/// enum of known cookie names in place of string literals.
///
/// # Example
///
/// ```rust
/// use cookie_scope::{CookieJar, RequestCookies};
///
/// let mut incoming = RequestCookies::new();
/// incoming.insert("session", "abc123");
///
/// let mut jar = CookieJar::new(incoming);
/// assert_eq!(jar.get("session"), Some("abc123"));
///
/// jar.put("theme", "dark");
/// assert_eq!(jar.get("theme"), Some("dark"));
/// assert_eq!(jar.get_or("missing", "light"), "light");
/// ```
///
/// [`wrap_cookies`]: crate::wrap_cookies
/// [`wrap_cookies_assuming_parsed`]: crate::wrap_cookies_assuming_parsed
#[derive(Debug, Clone, Default)]
pub struct CookieJar {
    incoming: RequestCookies,
    outgoing: ResponseCookies,
}

impl CookieJar {
    /// Creates a jar over the cookies of the current request, with no pending cookies.
    pub fn new(incoming: RequestCookies) -> CookieJar {
        CookieJar {
            incoming,
            outgoing: ResponseCookies::new(),
        }
    }

    /// Queues a cookie to be set on the response.
    ///
    /// Plain values are stored with `Path=/`; [`CookieAttributes`] are stored
    /// as they are. Any cookie previously queued under `name` is replaced.
    pub fn put<N, V>(&mut self, name: N, value: V)
    where
        N: AsRef<str>,
        V: Into<CookieValue>,
    {
        let cookie = value.into().into_attributes();
        self.outgoing.insert(name.as_ref(), cookie);
    }

    /// Returns the value of the cookie named `name`.
    ///
    /// Cookies queued with [`CookieJar::put()`] during this request take
    /// precedence over the cookies that came in with the request.
    pub fn get<N: AsRef<str>>(&self, name: N) -> Option<&str> {
        let name = name.as_ref();
        self.outgoing
            .get(name)
            .map(CookieAttributes::value)
            .or_else(|| self.incoming.get(name))
    }

    /// Like [`CookieJar::get()`], falling back to `default` when the cookie is absent.
    pub fn get_or<'a, N: AsRef<str>>(&'a self, name: N, default: &'a str) -> &'a str {
        self.get(name).unwrap_or(default)
    }

    /// Queues a cookie together with a signature cookie named [`signed_name(name)`].
    ///
    /// The signature is computed over the underlying value string. When `value`
    /// carries attributes, the signature cookie gets the same attributes.
    ///
    /// ```rust
    /// use cookie_scope::{CookieAttributes, CookieJar, SigningKey};
    ///
    /// let key = SigningKey::from("secret");
    /// let mut jar = CookieJar::default();
    /// jar.put_signed(&key, "user", CookieAttributes::new("alice").set_http_only(true));
    ///
    /// assert_eq!(jar.get_signed(&key, "user"), Some("alice"));
    /// assert_eq!(jar.pending("user__s").and_then(|c| c.http_only()), Some(true));
    /// ```
    ///
    /// [`signed_name(name)`]: signed_name
    pub fn put_signed<N, V>(&mut self, key: &SigningKey, name: N, value: V)
    where
        N: AsRef<str>,
        V: Into<CookieValue>,
    {
        let name = name.as_ref();
        let value = value.into();
        let signature = value.with_value(key.sign(value.value()));
        self.put(name, value);
        self.put(signed_name(name), signature);
    }

    /// Returns the value of the cookie named `name` if its signature cookie
    /// matches it under `key`.
    ///
    /// A missing cookie, a missing signature and a wrong signature all yield `None`.
    pub fn get_signed<N: AsRef<str>>(&self, key: &SigningKey, name: N) -> Option<&str> {
        let name = name.as_ref();
        let value = self.get(name)?;
        let signature = self.get(signed_name(name))?;
        if key.verify(value, signature) {
            Some(value)
        } else {
            tracing::debug!(cookie = name, "Signature mismatch, ignoring the cookie");
            None
        }
    }

    /// Like [`CookieJar::get_signed()`], falling back to `default`.
    pub fn get_signed_or<'a, N: AsRef<str>>(
        &'a self,
        key: &SigningKey,
        name: N,
        default: &'a str,
    ) -> &'a str {
        self.get_signed(key, name).unwrap_or(default)
    }

    /// The cookie queued under `name`, attributes included.
    pub fn pending<N: AsRef<str>>(&self, name: N) -> Option<&CookieAttributes> {
        self.outgoing.get(name.as_ref())
    }

    /// The cookies that came in with the request.
    pub fn incoming(&self) -> &RequestCookies {
        &self.incoming
    }

    /// The cookies queued so far.
    pub fn outgoing(&self) -> &ResponseCookies {
        &self.outgoing
    }

    /// Consumes the jar, returning the cookies to be set on the response.
    pub fn into_outgoing(self) -> ResponseCookies {
        self.outgoing
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;

    use crate::{signed_name, CookieAttributes, CookieJar, RequestCookies, SigningKey};

    fn jar_with(cookies: &[(&str, &str)]) -> CookieJar {
        let mut incoming = RequestCookies::new();
        for (name, value) in cookies {
            incoming.insert(*name, *value);
        }
        CookieJar::new(incoming)
    }

    enum Name {
        Theme,
    }

    impl AsRef<str> for Name {
        fn as_ref(&self) -> &str {
            match self {
                Name::Theme => "theme",
            }
        }
    }

    #[test]
    fn put_then_get() {
        let mut jar = CookieJar::default();
        for (name, value) in [("a", "1"), ("b", ""), ("with space", "x y")] {
            jar.put(name, value);
            assert_that!(jar.get(name), some(eq(value)));
        }
    }

    #[test]
    fn plain_values_get_the_root_path() {
        let mut jar = CookieJar::default();
        jar.put("theme", "dark");
        assert_eq!(
            jar.pending("theme"),
            Some(&CookieAttributes::new("dark").set_path("/"))
        );
    }

    #[test]
    fn attributed_values_are_stored_as_is() {
        let mut jar = CookieJar::default();
        let cookie = CookieAttributes::new("dark").set_domain("example.com");
        jar.put("theme", cookie.clone());
        assert_eq!(jar.pending("theme"), Some(&cookie));
        assert_eq!(jar.get("theme"), Some("dark"));
    }

    #[test]
    fn last_put_wins() {
        let mut jar = CookieJar::default();
        jar.put("theme", "dark");
        jar.put("theme", "light");
        assert_eq!(jar.get("theme"), Some("light"));
        assert_eq!(jar.outgoing().len(), 1);
    }

    #[test]
    fn missing_cookies_fall_back_to_the_default() {
        let jar = jar_with(&[("present", "1")]);
        assert_that!(jar.get("absent"), none());
        assert_eq!(jar.get_or("absent", "fallback"), "fallback");
        assert_eq!(jar.get_or("present", "fallback"), "1");
    }

    #[test]
    fn incoming_cookies_are_visible_without_put() {
        let jar = jar_with(&[("session", "abc123")]);
        assert_eq!(jar.get("session"), Some("abc123"));
        assert!(jar.outgoing().is_empty());
    }

    #[test]
    fn outgoing_shadows_incoming() {
        let mut jar = jar_with(&[("theme", "light")]);
        jar.put("theme", "dark");
        assert_eq!(jar.get("theme"), Some("dark"));
        assert_eq!(jar.incoming().get("theme"), Some("light"));
    }

    #[test]
    fn symbolic_names_are_normalized() {
        let mut jar = CookieJar::default();
        jar.put(Name::Theme, "dark");
        assert_eq!(jar.get("theme"), Some("dark"));
        assert_eq!(jar.get(Name::Theme), Some("dark"));
    }

    #[test]
    fn signed_name_appends_the_suffix() {
        assert_eq!(signed_name("session"), "session__s");
        assert_eq!(signed_name(""), "__s");
        assert_ne!(signed_name("a"), signed_name("b"));
    }

    #[test]
    fn signed_roundtrip() {
        let key = SigningKey::from("secret");
        let mut jar = CookieJar::default();
        jar.put_signed(&key, "user", "alice");

        assert_eq!(jar.get_signed(&key, "user"), Some("alice"));
        assert_eq!(jar.get("user"), Some("alice"));
        assert_eq!(jar.get("user__s"), Some(key.sign("alice").as_str()));
    }

    #[test]
    fn plain_signature_cookie_gets_the_root_path() {
        let key = SigningKey::from("secret");
        let mut jar = CookieJar::default();
        jar.put_signed(&key, "user", "alice");
        assert_eq!(
            jar.pending("user__s"),
            Some(&CookieAttributes::new(key.sign("alice")).set_path("/"))
        );
    }

    #[test]
    fn tampered_signature_is_rejected() {
        let key = SigningKey::from("secret");
        let mut jar = CookieJar::default();
        jar.put_signed(&key, "user", "alice");
        jar.put(signed_name("user"), "not-the-signature");

        assert_that!(jar.get_signed(&key, "user"), none());
        assert_eq!(jar.get_signed_or(&key, "user", "anonymous"), "anonymous");
    }

    #[test]
    fn tampered_value_is_rejected() {
        let key = SigningKey::from("secret");
        let mut jar = CookieJar::default();
        jar.put_signed(&key, "user", "alice");
        jar.put("user", "mallory");

        assert_that!(jar.get_signed(&key, "user"), none());
    }

    #[test]
    fn wrong_key_is_rejected() {
        let key = SigningKey::from("secret");
        let other = SigningKey::from("another secret");
        let mut jar = CookieJar::default();
        jar.put_signed(&key, "user", "alice");

        assert_that!(jar.get_signed(&other, "user"), none());
        assert_eq!(jar.get_signed_or(&other, "user", "anonymous"), "anonymous");
    }

    #[test]
    fn missing_signature_is_rejected() {
        let key = SigningKey::from("secret");
        let jar = jar_with(&[("user", "alice")]);
        assert_that!(jar.get_signed(&key, "user"), none());

        let signature = key.sign("alice");
        let jar = jar_with(&[("user__s", signature.as_str())]);
        assert_that!(jar.get_signed(&key, "user"), none());
    }

    #[test]
    fn incoming_signed_cookies_are_verified() {
        let key = SigningKey::from("secret");
        let signature = key.sign("alice");
        let jar = jar_with(&[("user", "alice"), ("user__s", signature.as_str())]);
        assert_that!(jar.get_signed(&key, "user"), some(eq("alice")));
    }

    #[test]
    fn signature_cookie_mirrors_the_attributes() {
        let key = SigningKey::from("secret");
        let mut jar = CookieJar::default();
        jar.put_signed(&key, "n", CookieAttributes::new("x").set_path("/admin"));

        let primary = jar.pending("n").unwrap();
        let signature = jar.pending("n__s").unwrap();
        assert_eq!(primary.path(), Some("/admin"));
        assert_eq!(signature.path(), Some("/admin"));
        assert_eq!(primary.value(), "x");
        assert_eq!(signature.value(), key.sign("x"));
        assert_eq!(jar.get_signed(&key, "n"), Some("x"));
    }

    #[test]
    fn jars_are_isolated() {
        let mut first = CookieJar::default();
        let second = CookieJar::default();
        first.put("theme", "dark");
        assert_that!(second.get("theme"), none());
    }
}
