//! Sidebar collapse state for the market client.
//!
//! The crate is split into UI-agnostic layers:
//! - [`SidebarStore`] owns the committed collapse flag and preferred width,
//!   coalesces toggle activations through a [`Debouncer`] and writes every
//!   committed change to a [`KeyValueStore`];
//! - [`Activation`] and [`ToggleAttributes`] describe the toggle control:
//!   which inputs activate it and which accessibility attributes it exposes;
//! - [`MemoryStore`] and [`JsonFileStore`] are the storage backends.
//!
//! Time is passed in by the host. A typical host forwards every raw
//! activation with its timestamp and, while [`SidebarStore::is_pending`]
//! is true, ticks the store periodically so the burst can be committed.
//!
//! # Quick Example
//!
//! ```
//! use std::time::{Duration, Instant};
//!
//! use market_ui_sidebar::{
//!     Activation, MemoryStore, SidebarConfig, SidebarStore,
//! };
//!
//! let mut store = SidebarStore::new(SidebarConfig::default(), MemoryStore::new());
//! let start = Instant::now();
//!
//! for _ in 0..3 {
//!     let _ = store.activate(&Activation::Pointer, start);
//! }
//!
//! let change = store.tick(start + Duration::from_millis(200));
//! assert_eq!(change.map(|change| change.collapsed), Some(true));
//! ```

mod config;
mod control;
mod debounce;
mod errors;
mod event;
mod model;
mod storage;
mod store;

pub use config::SidebarConfig;
pub use control::{Activation, ToggleAttributes, is_activation_key};
pub use debounce::Debouncer;
pub use errors::StorageError;
pub use event::SidebarEvent;
pub use model::{
    SIDEBAR_COLLAPSED_KEY, SIDEBAR_REGION_ID, SIDEBAR_TOGGLE_LABEL,
    SIDEBAR_WIDTH_KEY, SidebarChange, Visibility,
};
pub use storage::{
    JsonFileStore, KeyValueStore, MemoryStore, StoreLoadStatus, config_dir,
    default_store_path,
};
pub use store::SidebarStore;
