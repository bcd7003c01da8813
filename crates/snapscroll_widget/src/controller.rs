//! Section-navigation controller
//!
//! One [`ScrollController`] per bound container. It owns the current page
//! index, the animation-lock phase, and the algorithms for index transition,
//! offset computation, animation dispatch, pagination sync, lifecycle
//! callbacks, and resize reconciliation.
//!
//! The transition state machine is two states: `Idle --(navigate/goto)-->
//! Animating` (fires `before_scroll` before the visual change starts) and
//! `Animating --(completion)--> Idle` (fires `after_scroll`). Wheel and
//! keyboard input is dropped while `Animating`; pagination clicks are not
//! gated and may supersede the in-flight transition, whose completion is then
//! ignored by transition-id comparison.

use std::time::{Duration, Instant};

use snapscroll_core::debounce::Debouncer;
use snapscroll_core::dom::{Axis, DomAdapter, ElementId};
use snapscroll_core::error::DomError;
use snapscroll_core::events::{InputEvent, KeyCode};
use snapscroll_animation::{
    AnimationDriver, Easing, Strategy, TransitionId, TransitionRequest,
};

use crate::config::{ScrollConfig, SelectorNames};

/// Quiet window for resize reconciliation.
const RESIZE_DEBOUNCE: Duration = Duration::from_millis(200);

/// Animation-lock phase of the controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScrollPhase {
    #[default]
    Idle,
    /// A transition is in flight; gated input is dropped.
    Animating,
}

impl ScrollPhase {
    pub fn is_locked(&self) -> bool {
        matches!(self, ScrollPhase::Animating)
    }
}

/// A navigation command, the script-driven entry point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Next,
    Prev,
    Goto(usize),
}

/// The transition currently in flight.
#[derive(Clone, Copy, Debug)]
struct InFlight {
    id: TransitionId,
    /// Initialization jump: no hooks, no pagination re-sync.
    silent: bool,
}

/// Full-page scroller bound to one container.
pub struct ScrollController {
    element: ElementId,
    wrapper: Option<ElementId>,
    sections: Vec<ElementId>,
    markers: Vec<ElementId>,
    axis: Axis,
    easing: Easing,
    config: ScrollConfig,
    index: usize,
    phase: ScrollPhase,
    in_flight: Option<InFlight>,
    driver: Box<dyn AnimationDriver>,
    resize_debounce: Debouncer,
}

impl ScrollController {
    /// Bind a container. Resolution failures degrade to an inert controller
    /// that drops every transition; they never surface as errors.
    pub(crate) fn bind(
        dom: &mut dyn DomAdapter,
        element: ElementId,
        config: ScrollConfig,
        strategy: Strategy,
    ) -> Self {
        let axis = config.direction;
        let easing = match Easing::from_name(&config.timing) {
            Some(easing) => easing,
            None => {
                tracing::debug!(timing = %config.timing, "unknown timing function, using default");
                Easing::default()
            }
        };

        let (wrapper, sections) = match resolve_structure(dom, element, &config.selectors) {
            Ok(resolved) => (Some(resolved.0), resolved.1),
            Err(err) => {
                tracing::warn!(%err, "scroller structure unresolved, controller is inert");
                (None, Vec::new())
            }
        };

        // Malformed initial index degrades to the first page.
        let index = if config.index < sections.len() {
            config.index
        } else {
            0
        };

        let mut controller = Self {
            element,
            wrapper,
            sections,
            markers: Vec::new(),
            axis,
            easing,
            config,
            index,
            phase: ScrollPhase::Idle,
            in_flight: None,
            driver: strategy.driver(),
            resize_debounce: Debouncer::new(RESIZE_DEBOUNCE),
        };

        if let Some(wrapper) = controller.wrapper {
            controller.ensure_relative_position(dom, wrapper);
            if controller.axis == Axis::Horizontal {
                controller.presize_horizontal(dom, wrapper);
            }
        }

        if controller.config.pagination && !controller.sections.is_empty() {
            controller.init_pagination(dom);
        }

        // Nonzero start: one silent jump, no hooks, dots already placed.
        if controller.index != 0 {
            controller.scroll_to_current(dom, true);
        }

        controller
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn page_count(&self) -> usize {
        self.sections.len()
    }

    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }

    pub fn is_locked(&self) -> bool {
        self.phase.is_locked()
    }

    /// Section handles in document order.
    pub fn sections(&self) -> &[ElementId] {
        &self.sections
    }

    /// Pagination indicator handles, empty when pagination is disabled.
    pub fn markers(&self) -> &[ElementId] {
        &self.markers
    }

    // ========================================================================
    // Navigation operations
    // ========================================================================

    /// Advance one section. Index math wraps unconditionally; whether a wrap
    /// is currently permitted is the caller's gate (see `handle_event`).
    pub fn next(&mut self, dom: &mut dyn DomAdapter) {
        if self.sections.is_empty() {
            return;
        }
        self.index = if self.index == self.sections.len() - 1 {
            0
        } else {
            self.index + 1
        };
        self.scroll_to_current(dom, false);
    }

    /// Step back one section. Wraps unconditionally, like `next`.
    pub fn prev(&mut self, dom: &mut dyn DomAdapter) {
        if self.sections.is_empty() {
            return;
        }
        self.index = if self.index == 0 {
            self.sections.len() - 1
        } else {
            self.index - 1
        };
        self.scroll_to_current(dom, false);
    }

    /// Jump to `index` directly. Pagination dots guarantee the range; no
    /// further validation happens here.
    pub fn goto_index(&mut self, dom: &mut dyn DomAdapter, index: usize) {
        self.index = index;
        self.scroll_to_current(dom, false);
    }

    /// Typed command entry point for script-driven control.
    pub fn dispatch(&mut self, dom: &mut dyn DomAdapter, command: Command) {
        match command {
            Command::Next => self.next(dom),
            Command::Prev => self.prev(dom),
            Command::Goto(index) => self.goto_index(dom, index),
        }
    }

    // ========================================================================
    // Input policy
    // ========================================================================

    fn can_step_forward(&self) -> bool {
        self.config.loop_pages || self.index + 1 < self.sections.len()
    }

    fn can_step_back(&self) -> bool {
        self.config.loop_pages || self.index > 0
    }

    /// Route a normalized input event through the gating rules.
    pub fn handle_event(&mut self, dom: &mut dyn DomAdapter, event: InputEvent) {
        match event {
            InputEvent::Wheel { delta } => {
                if self.phase.is_locked() {
                    return;
                }
                if delta > 0.0 && self.can_step_back() {
                    self.prev(dom);
                } else if delta < 0.0 && self.can_step_forward() {
                    self.next(dom);
                }
            }
            InputEvent::Key { key } => {
                if !self.config.keyboard || self.phase.is_locked() {
                    return;
                }
                match key {
                    KeyCode::Left | KeyCode::Up if self.can_step_back() => self.prev(dom),
                    KeyCode::Right | KeyCode::Down if self.can_step_forward() => self.next(dom),
                    _ => {}
                }
            }
            InputEvent::Resize { .. } => self.resize_debounce.trigger(),
            // Not gated by the lock: a dot click is a manual override and
            // supersedes the in-flight transition.
            InputEvent::PaginationClick { item } => self.goto_index(dom, item),
        }
    }

    // ========================================================================
    // Frame driving and completion
    // ========================================================================

    /// Advance tween transitions and the resize debouncer. Call once per
    /// frame from the embedder's loop.
    pub fn tick(&mut self, dom: &mut dyn DomAdapter, dt_ms: f32) {
        let done = self.driver.tick(dom, dt_ms);
        for id in done {
            self.complete(id);
        }
        if self.resize_debounce.fire(Instant::now()) {
            self.reconcile_resize(dom);
        }
    }

    /// Feed the platform's transition-end signal (declarative strategy).
    pub fn on_transition_end(&mut self) {
        if let Some(id) = self.driver.acknowledge_end() {
            self.complete(id);
        }
    }

    /// Testing/polling hook: force the resize debouncer's deadline check at
    /// an explicit instant instead of `Instant::now`.
    pub fn poll_resize(&mut self, dom: &mut dyn DomAdapter, now: Instant) {
        if self.resize_debounce.fire(now) {
            self.reconcile_resize(dom);
        }
    }

    fn complete(&mut self, id: TransitionId) {
        let Some(in_flight) = self.in_flight else {
            tracing::trace!(?id, "completion with no transition in flight, ignored");
            return;
        };
        if in_flight.id != id {
            tracing::trace!(?id, "completion for superseded transition, ignored");
            return;
        }

        self.in_flight = None;
        self.phase = ScrollPhase::Idle;

        if !in_flight.silent {
            if let Some(&section) = self.sections.get(self.index) {
                let index = self.index;
                if let Some(hook) = self.config.after_scroll.as_mut() {
                    hook(section, index);
                }
            }
        }
    }

    // ========================================================================
    // Shared transition procedure
    // ========================================================================

    /// Slide to the section at the current index. `silent` marks the
    /// initialization jump: no hooks, no pagination re-sync.
    fn scroll_to_current(&mut self, dom: &mut dyn DomAdapter, silent: bool) {
        let Some(wrapper) = self.wrapper else {
            return;
        };
        let Some(&section) = self.sections.get(self.index) else {
            return;
        };
        let Some(dest) = dom.local_offset(section, self.axis) else {
            // The only defined no-op path: nothing locked, no hooks fired.
            tracing::debug!(index = self.index, "target position unresolved, transition dropped");
            return;
        };

        self.phase = ScrollPhase::Animating;

        if !silent {
            let index = self.index;
            if let Some(hook) = self.config.before_scroll.as_mut() {
                hook(section, index);
            }
        }

        let request = TransitionRequest {
            target: wrapper,
            axis: self.axis,
            to_px: -dest,
            duration_ms: self.config.duration_ms,
            easing: self.easing,
        };
        let id = self.driver.begin(dom, request);
        self.in_flight = Some(InFlight { id, silent });

        // Dots move when the slide is issued, not when it completes.
        if self.config.pagination && !silent {
            self.sync_markers(dom);
        }
    }

    fn sync_markers(&mut self, dom: &mut dyn DomAdapter) {
        let active = self.active_class();
        for (i, &marker) in self.markers.iter().enumerate() {
            if i == self.index {
                dom.add_class(marker, &active);
            } else {
                dom.remove_class(marker, &active);
            }
        }
    }

    // ========================================================================
    // Resize reconciliation
    // ========================================================================

    /// Heuristic correction after a debounced resize: when the current
    /// section has drifted by more than half the container's scroll-axis
    /// length, nudge the index one step toward zero offset, then re-run the
    /// shared transition either way to realign.
    fn reconcile_resize(&mut self, dom: &mut dyn DomAdapter) {
        // The first page sits at zero offset by construction.
        if self.index == 0 {
            return;
        }
        let Some(&section) = self.sections.get(self.index) else {
            return;
        };
        let Some(offset) = dom.viewport_offset(section, self.axis) else {
            return;
        };

        let half = dom.extent(self.element, self.axis) / 2.0;
        if offset.abs() > half {
            if offset > 0.0 {
                self.index -= 1;
            } else {
                // Clamped so a shifted layout cannot point past the list.
                self.index = (self.index + 1).min(self.sections.len() - 1);
            }
        }
        self.scroll_to_current(dom, false);
    }

    // ========================================================================
    // Bind-time layout
    // ========================================================================

    /// Children positions are measured against the wrapper, so it must be a
    /// positioned ancestor.
    fn ensure_relative_position(&self, dom: &mut dyn DomAdapter, wrapper: ElementId) {
        let position = dom.css(wrapper, "position");
        if position.as_deref() != Some("relative") {
            dom.set_css(wrapper, "position", "relative");
        }
    }

    /// Horizontal layout is not the default block flow: the wrapper widens to
    /// hold all sections side by side.
    fn presize_horizontal(&self, dom: &mut dyn DomAdapter, wrapper: ElementId) {
        let count = self.sections.len();
        dom.set_css(wrapper, "width", &format!("{}%", count * 100));
        let section_width = format!("{:.2}%", 100.0 / count as f32);
        for &section in &self.sections {
            dom.set_css(section, "width", &section_width);
            dom.set_css(section, "float", "left");
        }
    }

    fn init_pagination(&mut self, dom: &mut dyn DomAdapter) {
        let page_class = self
            .config
            .selectors
            .pagination
            .trim_start_matches('.')
            .to_string();
        let (list, items) = dom.append_list(self.element, &page_class, self.sections.len());
        dom.add_class(list, self.axis.orientation_class());

        if let Some(&marker) = items.get(self.index) {
            let active = self.active_class();
            dom.add_class(marker, &active);
        }
        self.markers = items;
    }

    fn active_class(&self) -> String {
        self.config
            .selectors
            .active
            .trim_start_matches('.')
            .to_string()
    }
}

fn resolve_structure(
    dom: &dyn DomAdapter,
    element: ElementId,
    selectors: &SelectorNames,
) -> Result<(ElementId, Vec<ElementId>), DomError> {
    let wrapper = dom
        .query(element, &selectors.wrapper)
        .ok_or_else(|| DomError::NoMatch(selectors.wrapper.clone()))?;
    let sections = dom.query_all(element, &selectors.section);
    if sections.is_empty() {
        return Err(DomError::EmptySections(selectors.section.clone()));
    }
    Ok((wrapper, sections))
}

#[cfg(test)]
mod tests {
    use super::*;
    use snapscroll_core::mock::MockDom;

    #[test]
    fn missing_wrapper_yields_inert_controller() {
        let mut dom = MockDom::new();
        let element = dom.create(".container");

        let mut controller =
            ScrollController::bind(&mut dom, element, ScrollConfig::default(), Strategy::Tween);
        assert_eq!(controller.page_count(), 0);

        // Every operation is a no-op; nothing locks, nothing panics.
        controller.next(&mut dom);
        controller.prev(&mut dom);
        controller.dispatch(&mut dom, Command::Goto(3));
        assert!(!controller.is_locked());
        assert_eq!(controller.current_index(), 3);
    }

    #[test]
    fn unknown_timing_degrades_to_default() {
        let mut dom = MockDom::new();
        let element = dom.stacked(3, 500.0, Axis::Vertical);

        let config = ScrollConfig::default().timing("bouncy");
        let controller = ScrollController::bind(&mut dom, element, config, Strategy::Tween);
        assert_eq!(controller.easing, Easing::Ease);
    }

    #[test]
    fn out_of_range_initial_index_clamps_to_zero() {
        let mut dom = MockDom::new();
        let element = dom.stacked(3, 500.0, Axis::Vertical);

        let config = ScrollConfig::default().index(7);
        let controller = ScrollController::bind(&mut dom, element, config, Strategy::Tween);
        assert_eq!(controller.current_index(), 0);
        assert!(!controller.is_locked());
    }
}
