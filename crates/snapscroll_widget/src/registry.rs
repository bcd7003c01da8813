//! Binding registry
//!
//! Controllers are not attached to elements; an explicit map from container
//! identity to controller owns them. Binding is idempotent per element: a
//! second bind keeps the existing controller and ignores the new
//! configuration. The animation strategy is probed once here, at registry
//! construction, and shared by every controller bound afterwards.

use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;

use snapscroll_core::dom::{DomAdapter, ElementId};
use snapscroll_animation::Strategy;

use crate::config::ScrollConfig;
use crate::controller::{Command, ScrollController};

/// Attribute flagging containers for declarative auto-bind.
pub const AUTO_BIND_ATTR: &str = "data-snap-scroll";

/// Owner of every bound controller.
pub struct ScrollRegistry {
    strategy: Strategy,
    controllers: FxHashMap<ElementId, ScrollController>,
}

impl ScrollRegistry {
    /// Create a registry, probing the animation strategy once.
    pub fn new(dom: &dyn DomAdapter) -> Self {
        let strategy = Strategy::probe(dom);
        tracing::debug!(?strategy, "scroll registry created");
        Self {
            strategy,
            controllers: FxHashMap::default(),
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Bind `element`, or return the controller already bound to it.
    pub fn bind(
        &mut self,
        dom: &mut dyn DomAdapter,
        element: ElementId,
        config: ScrollConfig,
    ) -> &mut ScrollController {
        match self.controllers.entry(element) {
            Entry::Occupied(entry) => {
                tracing::debug!(?element, "already bound, keeping existing controller");
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                entry.insert(ScrollController::bind(dom, element, config, self.strategy))
            }
        }
    }

    /// Bind every element carrying [`AUTO_BIND_ATTR`] with the default
    /// configuration. Run on environment ready.
    pub fn auto_bind(&mut self, dom: &mut dyn DomAdapter) {
        for element in dom.marked(AUTO_BIND_ATTR) {
            self.bind(dom, element, ScrollConfig::default());
        }
    }

    /// Tear a binding down. The returned controller drops its state; the
    /// embedder detaches its own event listeners.
    pub fn unbind(&mut self, element: ElementId) -> Option<ScrollController> {
        self.controllers.remove(&element)
    }

    pub fn is_bound(&self, element: ElementId) -> bool {
        self.controllers.contains_key(&element)
    }

    pub fn get(&self, element: ElementId) -> Option<&ScrollController> {
        self.controllers.get(&element)
    }

    pub fn get_mut(&mut self, element: ElementId) -> Option<&mut ScrollController> {
        self.controllers.get_mut(&element)
    }

    /// Script-driven control of a bound container.
    pub fn dispatch(&mut self, dom: &mut dyn DomAdapter, element: ElementId, command: Command) {
        if let Some(controller) = self.controllers.get_mut(&element) {
            controller.dispatch(dom, command);
        }
    }

    /// Advance every controller's tween transitions and resize debouncer.
    pub fn tick_all(&mut self, dom: &mut dyn DomAdapter, dt_ms: f32) {
        for controller in self.controllers.values_mut() {
            controller.tick(dom, dt_ms);
        }
    }
}
