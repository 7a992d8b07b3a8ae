use std::str::FromStr;

use super::errors::RouteParseError;
use super::location::parse_query;

/// One query key/value pair a legacy route requires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryConstraint {
    pub key: String,
    pub value: String,
}

/// Older URL shape of a destination: a base path plus query constraints.
///
/// Parsed once from an href like `/profile?section=calendar`. The given
/// href is kept verbatim for link generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyRoute {
    href: String,
    base_path: String,
    constraints: Vec<QueryConstraint>,
}

impl LegacyRoute {
    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn constraints(&self) -> &[QueryConstraint] {
        &self.constraints
    }
}

impl FromStr for LegacyRoute {
    type Err = RouteParseError;

    fn from_str(href: &str) -> Result<Self, Self::Err> {
        let (base_path, query) =
            href.split_once('?').ok_or(RouteParseError::MissingQuery)?;
        if base_path.is_empty() {
            return Err(RouteParseError::EmptyPath);
        }

        let query = query.split_once('#').map_or(query, |(head, _)| head);
        let constraints: Vec<QueryConstraint> = parse_query(query)
            .into_iter()
            .map(|(key, value)| QueryConstraint { key, value })
            .collect();
        if constraints.is_empty() {
            return Err(RouteParseError::EmptyQuery);
        }

        Ok(Self {
            href: href.to_string(),
            base_path: base_path.to_string(),
            constraints,
        })
    }
}

/// A navigation destination reachable by a primary path and, optionally, a
/// legacy alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDescriptor {
    primary: String,
    legacy: Option<LegacyRoute>,
}

impl RouteDescriptor {
    pub fn new(primary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            legacy: None,
        }
    }

    pub fn with_legacy(mut self, legacy: LegacyRoute) -> Self {
        self.legacy = Some(legacy);
        self
    }

    /// Attach a legacy alias parsed from `href`.
    ///
    /// An href that is not a path with query constraints is ignored and the
    /// descriptor keeps primary-only behaviour.
    pub fn with_legacy_href(self, href: &str) -> Self {
        match href.parse::<LegacyRoute>() {
            Ok(legacy) => self.with_legacy(legacy),
            Err(err) => {
                log::debug!("legacy route {href:?} ignored: {err}");
                self
            },
        }
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    pub fn legacy(&self) -> Option<&LegacyRoute> {
        self.legacy.as_ref()
    }
}
