//! linkdeck-core - editable page state
//!
//! Pure state management types for the editable page: the profile, the
//! ordered link sequence, and the drag-reorder state machine. Nothing here
//! touches storage or rendering, which keeps every operation unit-testable.

pub mod drag;
pub mod links;
pub mod profile;

pub use drag::{DragController, DragState};
pub use links::{Link, LinkId, LinkList};
pub use profile::Profile;
