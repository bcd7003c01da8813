//! Input event model
//!
//! The embedder translates platform events into [`InputEvent`]s and forwards
//! them to the bound controller. Gating (lock state, loop/bounds) happens on
//! the receiving side; the event layer stays dumb.

/// Keys the scroller reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyCode {
    Left,
    Up,
    Right,
    Down,
    /// Any other key, carried by its platform code. Ignored by the scroller.
    Other(u32),
}

/// A platform input event, normalized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Wheel or trackpad scroll. Positive `delta` scrolls toward the
    /// previous section, negative toward the next (wheel-up is positive).
    Wheel { delta: f32 },
    /// Key release.
    Key { key: KeyCode },
    /// Viewport or container resize. Only arms the resize debouncer.
    Resize { width: f32, height: f32 },
    /// Click on the pagination indicator at `item`.
    PaginationClick { item: usize },
}
