use std::collections::HashMap;

use crate::{CookieAttributes, Processor};

/// The cookies to be sent to the client via `Set-Cookie` headers, keyed by name.
///
/// There is at most one cookie per name: inserting a cookie with a name that's
/// already present replaces the previous one.
///
/// # Example
///
/// ```rust
/// use cookie_scope::{CookieAttributes, Processor, ResponseCookies};
///
/// let mut cookies = ResponseCookies::new();
/// cookies.insert("theme", CookieAttributes::new("light"));
/// cookies.insert("theme", CookieAttributes::new("dark").set_path("/"));
///
/// let header_values: Vec<_> = cookies.header_values(&Processor::default()).collect();
/// assert_eq!(header_values, vec!["theme=dark; Path=/".to_string()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseCookies {
    cookies: HashMap<String, CookieAttributes>,
}

impl ResponseCookies {
    /// Creates a new, empty [`ResponseCookies`] map.
    pub fn new() -> ResponseCookies {
        Default::default()
    }

    /// Inserts a cookie, returning the one it replaced, if any.
    pub fn insert<N: Into<String>>(
        &mut self,
        name: N,
        cookie: CookieAttributes,
    ) -> Option<CookieAttributes> {
        self.cookies.insert(name.into(), cookie)
    }

    pub fn get(&self, name: &str) -> Option<&CookieAttributes> {
        self.cookies.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<CookieAttributes> {
        self.cookies.remove(name)
    }

    /// Iterate over all `(name, cookie)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CookieAttributes)> {
        self.cookies.iter().map(|(n, c)| (n.as_str(), c))
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    /// Iterate over the `Set-Cookie` header values for all the cookies in `self`.
    pub fn header_values<'a>(
        &'a self,
        processor: &'a Processor,
    ) -> impl Iterator<Item = String> + 'a {
        self.cookies
            .iter()
            .map(move |(name, cookie)| processor.process_outgoing(name, cookie))
    }
}

/// Later entries override earlier ones with the same name.
impl<N: Into<String>> Extend<(N, CookieAttributes)> for ResponseCookies {
    fn extend<I: IntoIterator<Item = (N, CookieAttributes)>>(&mut self, iter: I) {
        for (name, cookie) in iter {
            self.insert(name, cookie);
        }
    }
}

impl IntoIterator for ResponseCookies {
    type Item = (String, CookieAttributes);
    type IntoIter = std::collections::hash_map::IntoIter<String, CookieAttributes>;

    fn into_iter(self) -> Self::IntoIter {
        self.cookies.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::{CookieAttributes, Processor, ResponseCookies};

    #[test]
    fn last_write_wins() {
        let mut cookies = ResponseCookies::new();
        assert!(cookies.insert("a", CookieAttributes::new("1")).is_none());
        let previous = cookies.insert("a", CookieAttributes::new("2"));
        assert_eq!(previous, Some(CookieAttributes::new("1")));
        assert_eq!(cookies.len(), 1);
        assert_eq!(cookies.get("a").map(CookieAttributes::value), Some("2"));
    }

    #[test]
    fn extend_overrides_same_named_cookies() {
        let mut cookies = ResponseCookies::new();
        cookies.insert("kept", CookieAttributes::new("k"));
        cookies.insert("replaced", CookieAttributes::new("old"));
        cookies.extend([("replaced", CookieAttributes::new("new").set_path("/"))]);

        assert_eq!(cookies.len(), 2);
        assert_eq!(cookies.get("kept").map(CookieAttributes::value), Some("k"));
        assert_eq!(
            cookies.get("replaced"),
            Some(&CookieAttributes::new("new").set_path("/"))
        );
    }

    #[test]
    fn one_header_value_per_cookie() {
        let mut cookies = ResponseCookies::new();
        cookies.insert("name", CookieAttributes::new("a value"));
        cookies.insert("other", CookieAttributes::new("x").set_http_only(true));

        let processor = Processor::default();
        let values: HashSet<_> = cookies.header_values(&processor).collect();
        assert_eq!(
            values,
            HashSet::from([
                "name=a%20value".to_string(),
                "other=x; HttpOnly".to_string(),
            ])
        );
    }
}
