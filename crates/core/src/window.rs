//! Viewport-related events.

use crate::time::Instant;

/// The logical size of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// The width, in logical pixels.
    pub width: f32,
    /// The height, in logical pixels.
    pub height: f32,
}

impl Size {
    /// Creates a new [`Size`] with the given dimensions.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A viewport event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// The viewport was resized.
    Resized(Size),

    /// An animation frame is being rendered.
    ///
    /// The [`Instant`] contains the current time. Hosts deliver this once
    /// for every redraw the runtime requested, strictly after the update
    /// that requested it.
    RedrawRequested(Instant),
}
