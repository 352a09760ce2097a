//! linkdeck - local-first link-in-bio page builder
//!
//! This is the application crate. The building blocks live in:
//! - `linkdeck-core` - profile, link sequence, drag-reorder state machine
//! - `linkdeck-theme` - appearance model and preset catalog
//! - `linkdeck-renderer` - projection into render-ready style values
//!
//! This crate ties them together: the editor [`Session`] routing every
//! mutation through named operations, the JSON page [`Store`] it mirrors
//! to, and the TOML [`Config`] controlling paths and the default theme.

pub mod config;
pub mod session;
pub mod store;

pub use config::Config;
pub use session::Session;
pub use store::{Store, StoreError, StoredPage};
