//! hoverscroll animation
//!
//! Physics behind a scroll view's settling phase.
//!
//! - **Fling decay**: exponential deceleration after release
//! - **Spring-back**: RK4-integrated spring returning an overscrolled offset to its edge
//! - **ScrollAnimator**: the capability a controller drives; [`OverScroller`] is the
//!   reference implementation

pub mod decay;
pub mod scroller;
pub mod spring;

pub use decay::{DecayConfig, FlingDecay};
pub use scroller::{AnimationMode, OverScroller, ScrollAnimator, ScrollerConfig};
pub use spring::{Spring, SpringConfig};
