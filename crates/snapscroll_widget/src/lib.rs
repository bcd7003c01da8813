//! Snapscroll Widget
//!
//! Full-page section scroller: each gesture (wheel, keyboard, pagination-dot
//! click, resize) moves the bound container exactly one section, animated by
//! a sliding offset.
//!
//! # Example
//!
//! ```rust
//! use snapscroll_core::{Axis, MockDom};
//! use snapscroll_widget::{ScrollConfig, ScrollRegistry};
//!
//! let mut dom = MockDom::new();
//! let container = dom.stacked(4, 800.0, Axis::Vertical);
//!
//! let mut registry = ScrollRegistry::new(&dom);
//! let controller = registry.bind(&mut dom, container, ScrollConfig::default());
//!
//! controller.next(&mut dom);
//! assert_eq!(controller.current_index(), 1);
//! ```

pub mod config;
pub mod controller;
pub mod registry;

pub use config::{ScrollConfig, ScrollHook, SelectorNames};
pub use controller::{Command, ScrollController, ScrollPhase};
pub use registry::{ScrollRegistry, AUTO_BIND_ATTR};
