use std::collections::BTreeMap;

/// Snapshot of the current location: path plus unique query parameters.
///
/// Build one per navigation; matchers never cache it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pathname: String,
    query: BTreeMap<String, String>,
}

impl Location {
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            query: BTreeMap::new(),
        }
    }

    /// Add a query parameter. An existing key keeps its first value.
    pub fn with_query(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.query.entry(key.into()).or_insert_with(|| value.into());
        self
    }

    /// Parse an href such as `/profile?section=calendar#slots`.
    ///
    /// The fragment is dropped. Pairs are split on `&` and the first `=`;
    /// a key without `=` maps to an empty value.
    pub fn parse(href: &str) -> Self {
        let href = href.split_once('#').map_or(href, |(head, _)| head);
        let (pathname, query) = match href.split_once('?') {
            Some((pathname, query)) => (pathname, query),
            None => (href, ""),
        };

        let mut location = Location::new(pathname);
        for (key, value) in parse_query(query) {
            location = location.with_query(key, value);
        }
        location
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    pub fn query(&self) -> &BTreeMap<String, String> {
        &self.query
    }
}

/// Split a raw query string into key/value pairs, skipping empty keys.
pub(crate) fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            if key.is_empty() {
                None
            } else {
                Some((key.to_string(), value.to_string()))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::Location;

    #[test]
    fn given_href_with_query_and_fragment_when_parsed_then_parts_are_split() {
        let location = Location::parse("/profile?section=calendar&tab=week#x");

        assert_eq!(location.pathname(), "/profile");
        assert_eq!(location.query_param("section"), Some("calendar"));
        assert_eq!(location.query_param("tab"), Some("week"));
        assert_eq!(location.query().len(), 2);
    }

    #[test]
    fn given_duplicate_keys_when_parsed_then_first_value_wins() {
        let location = Location::parse("/profile?section=calendar&section=about");

        assert_eq!(location.query_param("section"), Some("calendar"));
    }

    #[test]
    fn given_bare_key_and_empty_pairs_when_parsed_then_they_are_normalized() {
        let location = Location::parse("/search?&flag&=orphan&q=a=b");

        assert_eq!(location.query_param("flag"), Some(""));
        assert_eq!(location.query_param("q"), Some("a=b"));
        assert_eq!(location.query().len(), 2);
    }

    #[test]
    fn given_plain_path_when_parsed_then_query_is_empty() {
        let location = Location::parse("/schedule");

        assert_eq!(location, Location::new("/schedule"));
    }
}
