//! hoverscroll view
//!
//! Horizontal overscroll scrolling driven by touch input.
//!
//! # Example
//!
//! ```rust
//! use hoverscroll_platform::{DisplayMetrics, TouchEvent};
//! use hoverscroll_view::HOverScrollView;
//!
//! let mut view = HOverScrollView::new(&DisplayMetrics::new(2.0).unwrap());
//!
//! view.on_touch_event(&TouchEvent::down(400.0, 0));
//! view.on_touch_event(&TouchEvent::moved(340.0, 16));
//! view.on_touch_event(&TouchEvent::up(300.0, 32));
//!
//! // Once per display frame
//! while view.compute_scroll(1.0 / 60.0) {}
//! assert!(view.scroll_x() > 0);
//! ```

pub mod controller;
pub mod state;
pub mod velocity;
pub mod view;

pub use controller::OverscrollTouchController;
pub use state::{gesture_events, GestureState, StateTransitions};
pub use velocity::VelocityTracker;
pub use view::{HOverScrollView, ViewHost};

pub use hoverscroll_animation::{AnimationMode, OverScroller, ScrollAnimator};
pub use hoverscroll_platform::{
    DisplayMetrics, OverScrollRequest, OverScrollResult, ScrollHost, TouchAction, TouchEvent,
    ViewConfiguration,
};
