//! Route activity matching for navigation entries.
//!
//! A destination may be reachable through a clean primary path
//! (`/schedule`) and an older legacy path carrying a query parameter
//! (`/profile?section=calendar`). [`RouteDescriptor`] holds both shapes,
//! parsed once; [`is_active`] decides whether a [`Location`] points at the
//! destination and [`resolve_href`] picks the href a link should emit.
//!
//! ```
//! use market_ui_route::{
//!     HrefPolicy, Location, RouteDescriptor, is_active, resolve_href,
//! };
//!
//! let schedule = RouteDescriptor::new("/schedule")
//!     .with_legacy_href("/profile?section=calendar");
//!
//! assert!(is_active(&Location::parse("/profile?section=calendar"), &schedule));
//! assert_eq!(resolve_href(&schedule, HrefPolicy::default()), "/schedule");
//! ```

mod activity;
mod descriptor;
mod errors;
mod location;

pub use activity::{HrefPolicy, is_active, resolve_href};
pub use descriptor::{LegacyRoute, QueryConstraint, RouteDescriptor};
pub use errors::RouteParseError;
pub use location::Location;
