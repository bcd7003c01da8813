//! Snapscroll Animation System
//!
//! Timing curves and the animation capability behind the page scroller:
//!
//! - **Easing**: CSS-named timing functions with a numeric evaluator
//! - **Tween**: a single-value timed interpolation for the fallback strategy
//! - **Drivers**: the [`AnimationDriver`] capability with its declarative and
//!   tween strategies, selected once at startup via [`Strategy::probe`]

pub mod driver;
pub mod easing;
pub mod tween;

pub use driver::{
    AnimationDriver, Completions, DeclarativeDriver, Strategy, TransitionId, TransitionRequest,
    TweenDriver,
};
pub use easing::Easing;
pub use tween::Tween;
