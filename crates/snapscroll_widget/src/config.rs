//! Widget configuration
//!
//! User-supplied options merged over defaults at bind time; immutable
//! afterwards. Defaults mirror the classic full-page scroller setup: vertical
//! axis, 500 ms `ease` slide, pagination dots on, keyboard off, no looping.

use std::fmt;

use snapscroll_core::dom::{Axis, ElementId};

/// Selector names for the document roles the scroller touches.
#[derive(Clone, Debug)]
pub struct SelectorNames {
    /// The element whose offset is animated; contains all sections.
    pub wrapper: String,
    /// One logical page.
    pub section: String,
    /// The pagination list appended to the bound element.
    pub pagination: String,
    /// Class marking the active pagination item.
    pub active: String,
}

impl Default for SelectorNames {
    fn default() -> Self {
        Self {
            wrapper: ".sections".to_string(),
            section: ".section".to_string(),
            pagination: ".page".to_string(),
            active: ".active".to_string(),
        }
    }
}

/// Lifecycle hook receiving the section being entered and its index.
pub type ScrollHook = Box<dyn FnMut(ElementId, usize)>;

/// Scroller configuration.
pub struct ScrollConfig {
    pub selectors: SelectorNames,
    /// Starting page. Out-of-range values clamp to 0 at bind time.
    pub index: usize,
    /// CSS timing-function name. Unknown names fall back to `ease`.
    pub timing: String,
    pub duration_ms: u32,
    /// Whether navigation wraps at the ends.
    pub loop_pages: bool,
    pub pagination: bool,
    pub keyboard: bool,
    pub direction: Axis,
    /// Fired before each transition's visual change starts.
    pub before_scroll: Option<ScrollHook>,
    /// Fired after each transition completes.
    pub after_scroll: Option<ScrollHook>,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            selectors: SelectorNames::default(),
            index: 0,
            timing: "ease".to_string(),
            duration_ms: 500,
            loop_pages: false,
            pagination: true,
            keyboard: false,
            direction: Axis::Vertical,
            before_scroll: None,
            after_scroll: None,
        }
    }
}

impl fmt::Debug for ScrollConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollConfig")
            .field("selectors", &self.selectors)
            .field("index", &self.index)
            .field("timing", &self.timing)
            .field("duration_ms", &self.duration_ms)
            .field("loop_pages", &self.loop_pages)
            .field("pagination", &self.pagination)
            .field("keyboard", &self.keyboard)
            .field("direction", &self.direction)
            .field("before_scroll", &self.before_scroll.is_some())
            .field("after_scroll", &self.after_scroll.is_some())
            .finish()
    }
}

impl ScrollConfig {
    pub fn selectors(mut self, selectors: SelectorNames) -> Self {
        self.selectors = selectors;
        self
    }

    pub fn index(mut self, index: usize) -> Self {
        self.index = index;
        self
    }

    pub fn timing(mut self, timing: impl Into<String>) -> Self {
        self.timing = timing.into();
        self
    }

    pub fn duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn loop_pages(mut self, loop_pages: bool) -> Self {
        self.loop_pages = loop_pages;
        self
    }

    pub fn pagination(mut self, pagination: bool) -> Self {
        self.pagination = pagination;
        self
    }

    pub fn keyboard(mut self, keyboard: bool) -> Self {
        self.keyboard = keyboard;
        self
    }

    pub fn direction(mut self, direction: Axis) -> Self {
        self.direction = direction;
        self
    }

    pub fn on_before_scroll<F>(mut self, hook: F) -> Self
    where
        F: FnMut(ElementId, usize) + 'static,
    {
        self.before_scroll = Some(Box::new(hook));
        self
    }

    pub fn on_after_scroll<F>(mut self, hook: F) -> Self
    where
        F: FnMut(ElementId, usize) + 'static,
    {
        self.after_scroll = Some(Box::new(hook));
        self
    }
}
