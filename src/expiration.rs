use time::OffsetDateTime;

/// When a cookie expires: at a specific date-time, or at the end of the browser session.
///
/// An `Expiration` is constructible with `Expiration::from()` via any of:
///
///   * `None` -> `Expiration::Session`
///   * `Some(OffsetDateTime)` -> `Expiration::DateTime`
///   * `OffsetDateTime` -> `Expiration::DateTime`
///
/// ```rust
/// use cookie_scope::Expiration;
/// use cookie_scope::time::OffsetDateTime;
///
/// let expires = Expiration::from(None);
/// assert_eq!(expires, Expiration::Session);
///
/// let now = OffsetDateTime::now_utc();
/// assert_eq!(Expiration::from(now), Expiration::DateTime(now));
/// assert_eq!(Expiration::from(Some(now)), Expiration::DateTime(now));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expiration {
    /// Expiration for a "permanent" cookie at a specific date-time.
    DateTime(OffsetDateTime),
    /// Expiration for a "session" cookie. Browsers decide when a session is
    /// over, typically when they are closed.
    Session,
}

impl Expiration {
    /// Returns `true` if `self` is an `Expiration::Session`.
    pub fn is_session(&self) -> bool {
        matches!(self, Expiration::Session)
    }

    /// Returns the inner [`OffsetDateTime`] if `self` is a `DateTime`.
    pub fn datetime(&self) -> Option<OffsetDateTime> {
        match self {
            Expiration::Session => None,
            Expiration::DateTime(v) => Some(*v),
        }
    }
}

impl<T: Into<Option<OffsetDateTime>>> From<T> for Expiration {
    fn from(option: T) -> Self {
        match option.into() {
            Some(value) => Expiration::DateTime(value),
            None => Expiration::Session,
        }
    }
}
