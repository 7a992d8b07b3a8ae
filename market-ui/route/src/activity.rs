use super::descriptor::RouteDescriptor;
use super::location::Location;

/// Link generation switches for a destination with a legacy alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HrefPolicy {
    /// Whether the primary route is served.
    pub primary_available: bool,
    /// Force the legacy href whenever one exists.
    pub prefer_legacy: bool,
}

impl Default for HrefPolicy {
    fn default() -> Self {
        Self {
            primary_available: true,
            prefer_legacy: false,
        }
    }
}

/// Return whether `location` is the destination `descriptor` names.
///
/// An exact primary path match wins. Otherwise the legacy alias matches
/// when the path equals its base path and any one of its query constraints
/// is satisfied.
pub fn is_active(location: &Location, descriptor: &RouteDescriptor) -> bool {
    if location.pathname() == descriptor.primary() {
        return true;
    }

    let Some(legacy) = descriptor.legacy() else {
        return false;
    };
    if location.pathname() != legacy.base_path() {
        return false;
    }

    legacy.constraints().iter().any(|constraint| {
        location.query_param(&constraint.key) == Some(constraint.value.as_str())
    })
}

/// Pick the href a link to `descriptor` should emit.
///
/// Precedence: an explicit legacy preference, then falling back to legacy
/// when the primary route is unavailable, then the primary route.
pub fn resolve_href(descriptor: &RouteDescriptor, policy: HrefPolicy) -> &str {
    match descriptor.legacy() {
        Some(legacy) if policy.prefer_legacy || !policy.primary_available => {
            legacy.href()
        },
        _ => descriptor.primary(),
    }
}

#[cfg(test)]
mod tests {
    use super::{HrefPolicy, is_active, resolve_href};
    use crate::descriptor::RouteDescriptor;
    use crate::location::Location;

    fn schedule() -> RouteDescriptor {
        RouteDescriptor::new("/schedule")
            .with_legacy_href("/profile?section=calendar")
    }

    #[test]
    fn given_primary_path_when_checked_then_only_exact_path_is_active() {
        let descriptor = RouteDescriptor::new("/schedule");

        assert!(is_active(&Location::new("/schedule"), &descriptor));
        assert!(!is_active(&Location::new("/profile"), &descriptor));
        assert!(!is_active(&Location::new("/schedule/"), &descriptor));
    }

    #[test]
    fn given_primary_path_with_query_when_checked_then_query_is_ignored() {
        let location = Location::parse("/schedule?section=anything");

        assert!(is_active(&location, &schedule()));
    }

    #[test]
    fn given_legacy_query_when_checked_then_matching_pair_activates() {
        let on_calendar = Location::parse("/profile?section=calendar");
        let on_about = Location::parse("/profile?section=about");
        let bare_profile = Location::new("/profile");
        let elsewhere = Location::parse("/bookings?section=calendar");

        assert!(is_active(&on_calendar, &schedule()));
        assert!(!is_active(&on_about, &schedule()));
        assert!(!is_active(&bare_profile, &schedule()));
        assert!(!is_active(&elsewhere, &schedule()));
    }

    #[test]
    fn given_multiple_constraints_when_one_matches_then_route_is_active() {
        let descriptor = RouteDescriptor::new("/schedule")
            .with_legacy_href("/profile?section=calendar&view=week");
        let location = Location::parse("/profile?section=about&view=week");

        assert!(is_active(&location, &descriptor));
    }

    #[test]
    fn given_href_policies_when_resolved_then_precedence_is_applied() {
        let descriptor = schedule();

        let default = HrefPolicy::default();
        let preferred = HrefPolicy {
            primary_available: true,
            prefer_legacy: true,
        };
        let unavailable = HrefPolicy {
            primary_available: false,
            prefer_legacy: false,
        };

        assert_eq!(resolve_href(&descriptor, default), "/schedule");
        assert_eq!(
            resolve_href(&descriptor, preferred),
            "/profile?section=calendar"
        );
        assert_eq!(
            resolve_href(&descriptor, unavailable),
            "/profile?section=calendar"
        );
    }

    #[test]
    fn given_no_legacy_route_when_resolved_then_primary_is_always_used() {
        let descriptor = RouteDescriptor::new("/schedule");
        let policy = HrefPolicy {
            primary_available: false,
            prefer_legacy: true,
        };

        assert_eq!(resolve_href(&descriptor, policy), "/schedule");
    }
}
