use crate::{Expiration, SameSite};
use std::fmt;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::{Duration, OffsetDateTime, UtcOffset};

/// The value of a cookie, either on its own or together with its transport attributes.
///
/// Plain strings convert into [`CookieValue::Plain`], [`CookieAttributes`] into
/// [`CookieValue::Attributed`]:
///
/// ```rust
/// use cookie_scope::{CookieAttributes, CookieValue};
///
/// let plain = CookieValue::from("dark");
/// assert_eq!(plain.value(), "dark");
///
/// let attributed = CookieValue::from(CookieAttributes::new("dark").set_path("/admin"));
/// assert_eq!(attributed.value(), "dark");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum CookieValue {
    /// A bare value. It is stored with `Path=/` when written to a [`CookieJar`].
    ///
    /// [`CookieJar`]: crate::CookieJar
    Plain(String),
    /// A value with explicit attributes. It is stored as-is.
    Attributed(CookieAttributes),
}

impl CookieValue {
    /// Returns the underlying value string.
    pub fn value(&self) -> &str {
        match self {
            CookieValue::Plain(v) => v,
            CookieValue::Attributed(c) => c.value(),
        }
    }

    /// Returns a value with the same shape as `self`, carrying `value` instead.
    ///
    /// Attributes, if any, are kept.
    pub fn with_value<V: Into<String>>(&self, value: V) -> CookieValue {
        match self {
            CookieValue::Plain(_) => CookieValue::Plain(value.into()),
            CookieValue::Attributed(c) => CookieValue::Attributed(c.clone().set_value(value)),
        }
    }

    /// Normalizes `self` to its attributed form.
    pub fn into_attributes(self) -> CookieAttributes {
        match self {
            CookieValue::Plain(v) => CookieAttributes::new(v).set_path("/"),
            CookieValue::Attributed(c) => c,
        }
    }
}

impl From<&str> for CookieValue {
    fn from(value: &str) -> Self {
        CookieValue::Plain(value.to_owned())
    }
}

impl From<String> for CookieValue {
    fn from(value: String) -> Self {
        CookieValue::Plain(value)
    }
}

impl From<CookieAttributes> for CookieValue {
    fn from(value: CookieAttributes) -> Self {
        CookieValue::Attributed(value)
    }
}

/// A cookie value together with the attributes sent alongside it in a `Set-Cookie` header.
///
/// Use the `set_*` methods to build one:
///
/// ```rust
/// use cookie_scope::{CookieAttributes, SameSite};
///
/// let cookie = CookieAttributes::new("value")
///     .set_domain("www.rust-lang.org")
///     .set_path("/")
///     .set_secure(true)
///     .set_http_only(true)
///     .set_same_site(SameSite::Lax);
/// assert_eq!(cookie.path(), Some("/"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieAttributes {
    pub(crate) value: String,
    pub(crate) expires: Option<Expiration>,
    pub(crate) max_age: Option<Duration>,
    pub(crate) domain: Option<String>,
    pub(crate) path: Option<String>,
    /// Whether this cookie was marked Secure.
    pub(crate) secure: Option<bool>,
    /// Whether this cookie was marked HttpOnly.
    pub(crate) http_only: Option<bool>,
    pub(crate) same_site: Option<SameSite>,
}

impl CookieAttributes {
    /// Creates a new [`CookieAttributes`] with the given value and no attributes.
    pub fn new<V: Into<String>>(value: V) -> Self {
        CookieAttributes {
            value: value.into(),
            expires: None,
            max_age: None,
            domain: None,
            path: None,
            secure: None,
            http_only: None,
            same_site: None,
        }
    }

    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[inline]
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    #[inline]
    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    #[inline]
    pub fn max_age(&self) -> Option<Duration> {
        self.max_age
    }

    #[inline]
    pub fn expires(&self) -> Option<Expiration> {
        self.expires
    }

    /// `Some(true)` if the cookie was explicitly marked `Secure`, `Some(false)`
    /// if it was explicitly marked as not secure, `None` otherwise.
    #[inline]
    pub fn secure(&self) -> Option<bool> {
        self.secure
    }

    /// Same semantics as [`CookieAttributes::secure()`], for `HttpOnly`.
    #[inline]
    pub fn http_only(&self) -> Option<bool> {
        self.http_only
    }

    #[inline]
    pub fn same_site(&self) -> Option<SameSite> {
        self.same_site
    }

    /// Replaces the value, keeping every attribute.
    pub fn set_value<V: Into<String>>(mut self, value: V) -> Self {
        self.value = value.into();
        self
    }

    pub fn set_path<P: Into<String>>(mut self, path: P) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn unset_path(mut self) -> Self {
        self.path = None;
        self
    }

    pub fn set_domain<D: Into<String>>(mut self, domain: D) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Sets the `Max-Age` attribute. Passing `None` removes it.
    ///
    /// ```rust
    /// use cookie_scope::CookieAttributes;
    /// use cookie_scope::time::Duration;
    ///
    /// let cookie = CookieAttributes::new("value").set_max_age(Duration::hours(10));
    /// assert_eq!(cookie.max_age(), Some(Duration::hours(10)));
    /// ```
    pub fn set_max_age<D: Into<Option<Duration>>>(mut self, value: D) -> Self {
        self.max_age = value.into();
        self
    }

    pub fn set_expires<T: Into<Expiration>>(mut self, time: T) -> Self {
        self.expires = Some(time.into());
        self
    }

    /// Sets the `Secure` flag. Passing `None` leaves it to the default rules
    /// (see [`SameSite`]).
    pub fn set_secure<T: Into<Option<bool>>>(mut self, value: T) -> Self {
        self.secure = value.into();
        self
    }

    pub fn set_http_only<T: Into<Option<bool>>>(mut self, value: T) -> Self {
        self.http_only = value.into();
        self
    }

    pub fn set_same_site<T: Into<Option<SameSite>>>(mut self, value: T) -> Self {
        self.same_site = value.into();
        self
    }

    /// The `; Attr=...` parameters of a `Set-Cookie` header for `self`.
    pub(crate) fn parameters(&self) -> Parameters<'_> {
        Parameters(self)
    }
}

/// Renders the attributes of a [`CookieAttributes`] as `Set-Cookie` parameters.
pub(crate) struct Parameters<'a>(&'a CookieAttributes);

impl fmt::Display for Parameters<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cookie = self.0;
        if let Some(true) = cookie.http_only {
            write!(f, "; HttpOnly")?;
        }

        if let Some(same_site) = cookie.same_site {
            write!(f, "; SameSite={same_site}")?;
        }

        if cookie.secure == Some(true)
            || cookie.secure.is_none() && cookie.same_site == Some(SameSite::None)
        {
            write!(f, "; Secure")?;
        }

        if let Some(path) = cookie.path() {
            write!(f, "; Path={path}")?;
        }

        if let Some(domain) = cookie.domain() {
            write!(f, "; Domain={domain}")?;
        }

        if let Some(max_age) = cookie.max_age {
            write!(f, "; Max-Age={}", max_age.whole_seconds())?;
        }

        if let Some(Expiration::DateTime(time)) = cookie.expires {
            // From http://tools.ietf.org/html/rfc2616#section-3.3.1.
            static FMT: &[FormatItem<'_>] = format_description!("[weekday repr:short], [day] [month repr:short] [year padding:none] [hour]:[minute]:[second] GMT");
            let time: OffsetDateTime = time.to_offset(UtcOffset::UTC);
            write!(f, "; Expires={}", time.format(&FMT).map_err(|_| fmt::Error)?)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{CookieAttributes, CookieValue, Expiration, Processor, SameSite};
    use time::{Date, Duration, Month};

    fn render(cookie: CookieAttributes) -> String {
        cookie.parameters().to_string()
    }

    #[test]
    fn parameters() {
        assert_eq!(render(CookieAttributes::new("bar")), "");
        assert_eq!(
            render(CookieAttributes::new("bar").set_http_only(true)),
            "; HttpOnly"
        );
        assert_eq!(
            render(CookieAttributes::new("bar").set_max_age(Duration::seconds(10))),
            "; Max-Age=10"
        );
        assert_eq!(
            render(CookieAttributes::new("bar").set_secure(true)),
            "; Secure"
        );
        assert_eq!(
            render(CookieAttributes::new("bar").set_path("/")),
            "; Path=/"
        );
        assert_eq!(
            render(CookieAttributes::new("bar").set_domain("www.rust-lang.org")),
            "; Domain=www.rust-lang.org"
        );
        assert_eq!(
            render(CookieAttributes::new("bar").set_same_site(SameSite::Strict)),
            "; SameSite=Strict"
        );
    }

    #[test]
    fn same_site_none_implies_secure() {
        assert_eq!(
            render(CookieAttributes::new("bar").set_same_site(SameSite::None)),
            "; SameSite=None; Secure"
        );
        assert_eq!(
            render(
                CookieAttributes::new("bar")
                    .set_same_site(SameSite::None)
                    .set_secure(false)
            ),
            "; SameSite=None"
        );
    }

    #[test]
    fn expires_is_rendered_in_gmt() {
        let time = Date::from_calendar_date(2015, Month::October, 21)
            .unwrap()
            .with_hms(7, 28, 0)
            .unwrap()
            .assume_utc();
        let cookie = CookieAttributes::new("bar").set_expires(time);
        assert_eq!(render(cookie), "; Expires=Wed, 21 Oct 2015 07:28:00 GMT");

        let session = CookieAttributes::new("bar").set_expires(Expiration::Session);
        assert_eq!(render(session), "");
    }

    #[test]
    fn full_header_value() {
        let cookie = CookieAttributes::new("bar")
            .set_http_only(true)
            .set_path("/admin")
            .set_max_age(Duration::minutes(1));
        assert_eq!(
            Processor::default().process_outgoing("foo", &cookie),
            "foo=bar; HttpOnly; Path=/admin; Max-Age=60"
        );
    }

    #[test]
    fn plain_values_default_to_root_path() {
        let cookie = CookieValue::from("dark").into_attributes();
        assert_eq!(cookie, CookieAttributes::new("dark").set_path("/"));

        let cookie = CookieValue::from(CookieAttributes::new("dark")).into_attributes();
        assert_eq!(cookie.path(), None);
    }

    #[test]
    fn with_value_keeps_the_shape() {
        let plain = CookieValue::from("x").with_value("y");
        assert_eq!(plain, CookieValue::Plain("y".into()));

        let attributed = CookieValue::from(CookieAttributes::new("x").set_secure(true));
        let replaced = attributed.with_value("y");
        assert_eq!(
            replaced,
            CookieValue::Attributed(CookieAttributes::new("y").set_secure(true))
        );
    }
}
