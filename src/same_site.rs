use std::fmt;

/// The `SameSite` cookie attribute.
///
/// With `Strict` the browser never sends the cookie on cross-site requests;
/// with `Lax` it only does so for top-level navigations using safe methods;
/// with `None` it always does, provided the cookie is also `Secure`.
///
/// A cookie marked `SameSite=None` gets the `Secure` flag when rendered,
/// unless `secure` was explicitly set to `false` via
/// [`CookieAttributes::set_secure()`].
///
/// [`CookieAttributes::set_secure()`]: crate::CookieAttributes::set_secure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum SameSite {
    #[cfg_attr(feature = "serde", serde(alias = "strict"))]
    Strict,
    #[cfg_attr(feature = "serde", serde(alias = "lax"))]
    Lax,
    #[cfg_attr(feature = "serde", serde(alias = "none"))]
    None,
}

impl SameSite {
    /// Returns the attribute value as it appears in a `Set-Cookie` header.
    ///
    /// ```rust
    /// use cookie_scope::SameSite;
    ///
    /// assert_eq!(SameSite::Lax.as_str(), "Lax");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match *self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
