use market_ui_route::{
    HrefPolicy, Location, RouteDescriptor, is_active, resolve_href,
};

/// Sidebar navigation destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NavItem {
    Schedule,
    Profile,
    Bookings,
    Specialists,
}

pub(crate) const NAV_ITEMS: [NavItem; 4] = [
    NavItem::Schedule,
    NavItem::Profile,
    NavItem::Bookings,
    NavItem::Specialists,
];

/// Path the client starts on.
pub(crate) const HOME_PATH: &str = "/schedule";

impl NavItem {
    pub(crate) fn title(self) -> &'static str {
        match self {
            NavItem::Schedule => "Schedule",
            NavItem::Profile => "Profile",
            NavItem::Bookings => "Bookings",
            NavItem::Specialists => "Specialists",
        }
    }

    pub(crate) fn descriptor(self) -> RouteDescriptor {
        match self {
            NavItem::Schedule => RouteDescriptor::new("/schedule")
                .with_legacy_href("/profile?section=calendar"),
            NavItem::Profile => RouteDescriptor::new("/profile"),
            NavItem::Bookings => RouteDescriptor::new("/bookings")
                .with_legacy_href("/profile?section=bookings"),
            NavItem::Specialists => RouteDescriptor::new("/specialists"),
        }
    }

    /// Schedule pages are still served from the profile calendar section.
    pub(crate) fn href_policy(self) -> HrefPolicy {
        match self {
            NavItem::Schedule => HrefPolicy {
                primary_available: false,
                prefer_legacy: false,
            },
            _ => HrefPolicy::default(),
        }
    }

    pub(crate) fn href(self) -> String {
        resolve_href(&self.descriptor(), self.href_policy()).to_string()
    }

    /// Whether this entry should be highlighted for `location`.
    ///
    /// The profile entry stands aside while a legacy section of another
    /// entry is open, so only one entry is highlighted at a time.
    pub(crate) fn is_active(self, location: &Location) -> bool {
        if !is_active(location, &self.descriptor()) {
            return false;
        }

        match self {
            NavItem::Profile => !NAV_ITEMS
                .iter()
                .filter(|item| **item != NavItem::Profile)
                .any(|item| is_active(location, &item.descriptor())),
            _ => true,
        }
    }
}
