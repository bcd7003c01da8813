//! Snapscroll Core
//!
//! Foundational pieces of the snapscroll full-page scroller:
//!
//! - **DOM adapter seam**: the [`DomAdapter`] trait and opaque [`ElementId`]
//!   handles the widget uses instead of a real document
//! - **Input events**: normalized wheel/keyboard/resize/pagination events
//! - **Debounce**: a reusable cancel-and-reschedule primitive
//! - **Mock DOM**: an in-memory adapter for tests and headless runs

pub mod debounce;
pub mod dom;
pub mod error;
pub mod events;
pub mod mock;

pub use debounce::Debouncer;
pub use dom::{Axis, DomAdapter, ElementId};
pub use error::DomError;
pub use events::{InputEvent, KeyCode};
pub use mock::MockDom;
