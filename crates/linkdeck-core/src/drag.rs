//! Drag-reorder state machine
//!
//! Models drag-to-reorder as an explicit state machine instead of coupling
//! reordering to pointer geometry. Hover updates arrive at frame frequency
//! and only adjust the preview target; nothing touches the authoritative
//! sequence until the single commit transition on drop.

/// Current phase of a drag gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No drag in progress
    #[default]
    Idle,
    /// An item is being dragged but is not over a drop slot
    Dragging { source: usize },
    /// The dragged item is hovering over a drop slot
    Hovering { source: usize, target: usize },
}

/// Tracks one drag gesture from pick-up to drop
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        !matches!(self.state, DragState::Idle)
    }

    /// The item index a drop would currently land on, if any
    pub fn preview_target(&self) -> Option<usize> {
        match self.state {
            DragState::Hovering { target, .. } => Some(target),
            _ => None,
        }
    }

    /// Start dragging the item at `source`
    ///
    /// Starting a new drag replaces any gesture already in progress.
    pub fn begin(&mut self, source: usize) {
        self.state = DragState::Dragging { source };
    }

    /// Update the hovered drop slot
    ///
    /// Idempotent and side-effect-free; safe to call on every pointer move.
    /// Ignored when no drag is in progress.
    pub fn hover(&mut self, target: usize) {
        match self.state {
            DragState::Idle => {}
            DragState::Dragging { source } | DragState::Hovering { source, .. } => {
                self.state = DragState::Hovering { source, target };
            }
        }
    }

    /// The pointer left all drop slots; keep dragging without a target
    pub fn leave(&mut self) {
        if let DragState::Hovering { source, .. } = self.state {
            self.state = DragState::Dragging { source };
        }
    }

    /// Abandon the gesture without reordering
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    /// Finish the gesture
    ///
    /// Returns the `(from, to)` pair to apply to the authoritative sequence
    /// when the drop lands on a different slot than the item started in;
    /// `None` otherwise. Always resets to idle.
    pub fn commit(&mut self) -> Option<(usize, usize)> {
        let result = match self.state {
            DragState::Hovering { source, target } if source != target => Some((source, target)),
            _ => None,
        };
        self.state = DragState::Idle;
        result
    }
}
