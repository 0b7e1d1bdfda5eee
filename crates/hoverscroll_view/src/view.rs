//! Horizontally overscrolling view
//!
//! Bundles an [`OverscrollTouchController`] with the host-side state it drives:
//! the scroll offset, the ancestor intercept flag and the pending redraw.

use hoverscroll_animation::{OverScroller, ScrollAnimator};
use hoverscroll_platform::{
    DisplayMetrics, InputSource, ScrollHost, TouchAction, TouchEvent, ViewConfiguration,
};

use crate::controller::OverscrollTouchController;
use crate::state::GestureState;

/// Host-side state owned by the view
#[derive(Debug, Clone, Default)]
pub struct ViewHost {
    scroll_x: i32,
    disallow_intercept: bool,
    redraw_pending: bool,
}

impl ScrollHost for ViewHost {
    fn scroll_x(&self) -> i32 {
        self.scroll_x
    }

    fn scroll_to(&mut self, x: i32) {
        if self.scroll_x != x {
            self.scroll_x = x;
            self.redraw_pending = true;
        }
    }

    fn request_disallow_intercept(&mut self) {
        self.disallow_intercept = true;
    }

    fn invalidate(&mut self) {
        self.redraw_pending = true;
    }
}

/// A horizontally scrolling surface with elastic edges
#[derive(Debug)]
pub struct HOverScrollView<A: ScrollAnimator = OverScroller> {
    host: ViewHost,
    controller: OverscrollTouchController<A>,
}

impl HOverScrollView<OverScroller> {
    /// View using platform default thresholds for the given display
    pub fn new(metrics: &DisplayMetrics) -> Self {
        Self::with_config(ViewConfiguration::scaled(metrics))
    }

    pub fn with_config(config: ViewConfiguration) -> Self {
        Self::with_controller(OverscrollTouchController::with_config(config))
    }
}

impl<A: ScrollAnimator> HOverScrollView<A> {
    pub fn with_controller(controller: OverscrollTouchController<A>) -> Self {
        Self {
            host: ViewHost::default(),
            controller,
        }
    }

    pub fn controller(&self) -> &OverscrollTouchController<A> {
        &self.controller
    }

    pub fn scroll_x(&self) -> i32 {
        self.host.scroll_x
    }

    /// Largest legal offset
    pub fn scroll_range(&self) -> i32 {
        self.controller.config().scroll_range
    }

    pub fn state(&self) -> GestureState {
        self.controller.state()
    }

    /// Whether the ancestors were told to leave the current gesture alone
    pub fn disallows_intercept(&self) -> bool {
        self.host.disallow_intercept
    }

    /// Deliver one touch sample; returns true if it was consumed
    pub fn on_touch_event(&mut self, event: &TouchEvent) -> bool {
        if event.action == TouchAction::Down {
            self.host.disallow_intercept = false;
        }
        self.controller.on_touch_event(event, &mut self.host)
    }

    /// Deliver every pending sample from `source`; returns how many were consumed
    pub fn dispatch<S: InputSource>(&mut self, source: &mut S) -> usize {
        source
            .touch_stream()
            .filter(|event| self.on_touch_event(event))
            .count()
    }

    /// Display refresh callback: advance any running animation by `dt` seconds
    pub fn compute_scroll(&mut self, dt: f32) -> bool {
        self.controller.compute_scroll(dt, &mut self.host)
    }

    /// Programmatic fling with `velocity_x` px/s
    pub fn fling(&mut self, velocity_x: f32) {
        self.controller.fling(velocity_x, &mut self.host);
    }

    /// Jump to `x`, stopping any running animation
    pub fn scroll_to(&mut self, x: i32) {
        self.controller.abort_animation();
        self.host.scroll_to(x);
    }

    /// Consume the pending-redraw flag
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.host.redraw_pending)
    }
}
