//! Single-value property tween
//!
//! The fallback animation strategy drives the wrapper offset with one of
//! these per transition: a timed interpolation from a start to an end value
//! through an [`Easing`] curve, advanced by the embedder's frame loop.

use crate::easing::Easing;

/// A timed interpolation between two values.
#[derive(Clone, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    duration_ms: u32,
    easing: Easing,
    elapsed_ms: f32,
    playing: bool,
}

impl Tween {
    /// Create a tween; call [`start`](Tween::start) to begin playback.
    pub fn new(from: f32, to: f32, duration_ms: u32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms,
            easing,
            elapsed_ms: 0.0,
            playing: false,
        }
    }

    pub fn start(&mut self) {
        self.elapsed_ms = 0.0;
        self.playing = true;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Linear progress in `[0, 1]`, before easing.
    pub fn progress(&self) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// Current eased value.
    pub fn value(&self) -> f32 {
        let eased = self.easing.apply(self.progress());
        self.from + (self.to - self.from) * eased
    }

    /// Final value of the tween.
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Advance by `dt_ms`. Returns `true` when this call finished the tween.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        if !self.playing {
            return false;
        }

        self.elapsed_ms += dt_ms;
        if self.elapsed_ms >= self.duration_ms as f32 {
            self.elapsed_ms = self.duration_ms as f32;
            self.playing = false;
            return true;
        }
        false
    }
}
