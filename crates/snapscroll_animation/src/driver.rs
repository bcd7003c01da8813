//! Animation strategy drivers
//!
//! Moving the sections wrapper is done by one of two strategies, chosen once
//! at startup from the platform capability and never per call:
//!
//! - [`DeclarativeDriver`] writes a CSS `transition` + `transform` pair and
//!   waits for the platform's transition-end signal, forwarded by the
//!   embedder through [`AnimationDriver::acknowledge_end`]
//! - [`TweenDriver`] owns a [`Tween`] per transition and writes the offset
//!   itself on every [`AnimationDriver::tick`]
//!
//! Every transition is tagged with a [`TransitionId`]. Completions are
//! reported by id so a caller can ignore signals for transitions it has
//! superseded (pagination clicks may interrupt an in-flight slide).

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use snapscroll_core::dom::{Axis, DomAdapter, ElementId};

use crate::easing::Easing;
use crate::tween::Tween;

new_key_type! {
    /// Identifier tagging one requested transition.
    pub struct TransitionId;
}

/// Transition ids completed during a tick.
pub type Completions = SmallVec<[TransitionId; 2]>;

/// One requested wrapper movement.
#[derive(Clone, Copy, Debug)]
pub struct TransitionRequest {
    /// Element to move (the sections wrapper).
    pub target: ElementId,
    pub axis: Axis,
    /// Destination offset in pixels, usually the negated section position.
    pub to_px: f32,
    pub duration_ms: u32,
    pub easing: Easing,
}

/// The animation capability both strategies expose.
pub trait AnimationDriver {
    /// Start moving `request.target` toward `request.to_px`. A transition
    /// already running for the same target is superseded; its completion
    /// will never be reported.
    fn begin(&mut self, dom: &mut dyn DomAdapter, request: TransitionRequest) -> TransitionId;

    /// Advance time-driven transitions by `dt_ms`. Returns the transitions
    /// that finished during this call. A no-op for the declarative strategy.
    fn tick(&mut self, dom: &mut dyn DomAdapter, dt_ms: f32) -> Completions;

    /// Feed the platform's transition-end signal. Returns the id of the
    /// transition it completes, or `None` when no transition is pending
    /// (stale signal, or tween strategy active).
    fn acknowledge_end(&mut self) -> Option<TransitionId>;
}

/// Which strategy a deployment runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Hardware-accelerated CSS transitions.
    Declarative,
    /// Per-frame property tweening.
    Tween,
}

impl Strategy {
    /// Probe the platform once at startup.
    pub fn probe(dom: &dyn DomAdapter) -> Self {
        if dom.supports_transitions() {
            Strategy::Declarative
        } else {
            tracing::debug!("declarative transitions unsupported, using tween fallback");
            Strategy::Tween
        }
    }

    /// Build a driver for this strategy.
    pub fn driver(&self) -> Box<dyn AnimationDriver> {
        match self {
            Strategy::Declarative => Box::new(DeclarativeDriver::new()),
            Strategy::Tween => Box::new(TweenDriver::new()),
        }
    }
}

// ============================================================================
// Declarative strategy
// ============================================================================

/// Strategy (a): declarative CSS transitions.
///
/// Writing a new `transform` while one is transitioning restarts the
/// platform transition, so at most one transition is pending at a time; a
/// superseded id is forgotten at [`begin`](AnimationDriver::begin).
pub struct DeclarativeDriver {
    ids: SlotMap<TransitionId, ()>,
    pending: Option<TransitionId>,
}

impl DeclarativeDriver {
    pub fn new() -> Self {
        Self {
            ids: SlotMap::with_key(),
            pending: None,
        }
    }
}

impl Default for DeclarativeDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationDriver for DeclarativeDriver {
    fn begin(&mut self, dom: &mut dyn DomAdapter, request: TransitionRequest) -> TransitionId {
        if let Some(superseded) = self.pending.take() {
            tracing::trace!(?superseded, "transition superseded before completion");
            self.ids.remove(superseded);
        }

        dom.set_css(
            request.target,
            "transition",
            &format!(
                "all {}ms {}",
                request.duration_ms,
                request.easing.css_name()
            ),
        );
        dom.set_css(
            request.target,
            "transform",
            &request.axis.translate(request.to_px),
        );

        let id = self.ids.insert(());
        self.pending = Some(id);
        id
    }

    fn tick(&mut self, _dom: &mut dyn DomAdapter, _dt_ms: f32) -> Completions {
        Completions::new()
    }

    fn acknowledge_end(&mut self) -> Option<TransitionId> {
        let id = self.pending.take();
        if let Some(id) = id {
            self.ids.remove(id);
        } else {
            tracing::trace!("transition-end signal with nothing pending, ignored");
        }
        id
    }
}

// ============================================================================
// Tween fallback strategy
// ============================================================================

struct ActiveTween {
    target: ElementId,
    axis: Axis,
    tween: Tween,
}

/// Strategy (b): per-frame property tweening.
pub struct TweenDriver {
    active: SlotMap<TransitionId, ActiveTween>,
}

impl TweenDriver {
    pub fn new() -> Self {
        Self {
            active: SlotMap::with_key(),
        }
    }
}

impl Default for TweenDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationDriver for TweenDriver {
    fn begin(&mut self, dom: &mut dyn DomAdapter, request: TransitionRequest) -> TransitionId {
        // Supersede any tween already moving this target.
        let superseded: Vec<TransitionId> = self
            .active
            .iter()
            .filter(|(_, a)| a.target == request.target && a.axis == request.axis)
            .map(|(id, _)| id)
            .collect();
        for id in superseded {
            tracing::trace!(?id, "tween superseded before completion");
            self.active.remove(id);
        }

        let mut tween = Tween::new(
            dom.offset(request.target, request.axis),
            request.to_px,
            request.duration_ms,
            request.easing,
        );
        tween.start();

        self.active.insert(ActiveTween {
            target: request.target,
            axis: request.axis,
            tween,
        })
    }

    fn tick(&mut self, dom: &mut dyn DomAdapter, dt_ms: f32) -> Completions {
        let mut done = Completions::new();
        for (id, active) in self.active.iter_mut() {
            if active.tween.tick(dt_ms) {
                done.push(id);
            }
            dom.set_offset(active.target, active.axis, active.tween.value());
        }
        for id in &done {
            self.active.remove(*id);
        }
        done
    }

    fn acknowledge_end(&mut self) -> Option<TransitionId> {
        // Platform transition signals mean nothing under this strategy.
        None
    }
}
