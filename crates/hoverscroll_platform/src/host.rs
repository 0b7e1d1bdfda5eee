//! Scroll host capability
//!
//! The host owns the actual scroll offset of the view. Controllers never write
//! the offset directly; they send an [`OverScrollRequest`] and react to the
//! [`OverScrollResult`] the host reports back.

/// A request to move the scroll offset by a delta with an elastic allowance
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct OverScrollRequest {
    pub delta_x: i32,
    pub delta_y: i32,
    /// Offset the delta is applied to
    pub scroll_x: i32,
    pub scroll_y: i32,
    /// Largest legal offset on each axis; the lower bound is always 0
    pub scroll_range_x: i32,
    pub scroll_range_y: i32,
    /// How far past either edge the offset may travel
    pub max_over_scroll_x: i32,
    pub max_over_scroll_y: i32,
    /// Whether the request originates from an active touch
    pub is_touch_event: bool,
}

impl OverScrollRequest {
    /// Horizontal-only request
    pub fn horizontal(
        delta_x: i32,
        scroll_x: i32,
        scroll_range_x: i32,
        max_over_scroll_x: i32,
        is_touch_event: bool,
    ) -> Self {
        Self {
            delta_x,
            scroll_x,
            scroll_range_x,
            max_over_scroll_x,
            is_touch_event,
            ..Default::default()
        }
    }
}

/// Post-clamp outcome of an [`OverScrollRequest`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct OverScrollResult {
    pub scroll_x: i32,
    pub scroll_y: i32,
    /// The horizontal candidate ran past the elastic band and was pinned
    pub clamped_x: bool,
    pub clamped_y: bool,
}

impl OverScrollResult {
    pub fn is_clamped(&self) -> bool {
        self.clamped_x || self.clamped_y
    }
}

fn clamp_axis(scroll: i32, delta: i32, range: i32, max_over: i32) -> (i32, bool) {
    let candidate = scroll.saturating_add(delta);
    let low = -max_over;
    let high = range.saturating_add(max_over);

    if candidate > high {
        (high, true)
    } else if candidate < low {
        (low, true)
    } else {
        (candidate, false)
    }
}

/// Resolve an over-scroll request against `[-allowance, range + allowance]`
///
/// A candidate inside the elastic band is accepted unchanged and reported as
/// not clamped; one beyond the band is pinned to the band edge and reported as
/// clamped. Touch and programmatic requests are treated the same, each with its
/// own allowance.
pub fn over_scroll_by(request: &OverScrollRequest) -> OverScrollResult {
    let (scroll_x, clamped_x) = clamp_axis(
        request.scroll_x,
        request.delta_x,
        request.scroll_range_x,
        request.max_over_scroll_x.max(0),
    );
    let (scroll_y, clamped_y) = clamp_axis(
        request.scroll_y,
        request.delta_y,
        request.scroll_range_y,
        request.max_over_scroll_y.max(0),
    );

    OverScrollResult {
        scroll_x,
        scroll_y,
        clamped_x,
        clamped_y,
    }
}

/// Host-side view services used by a scroll controller
///
/// All calls happen on the UI dispatch thread.
pub trait ScrollHost {
    /// Current horizontal offset
    fn scroll_x(&self) -> i32;

    /// Move the offset, bypassing any clamping
    fn scroll_to(&mut self, x: i32);

    /// Ask ancestors to stop intercepting the current gesture
    fn request_disallow_intercept(&mut self);

    /// Schedule a redraw (and with it, the next animation tick)
    fn invalidate(&mut self);

    /// Apply a delta with elastic clamping and report the outcome
    ///
    /// The default resolves the request with [`over_scroll_by`] and moves the
    /// offset to the result.
    fn over_scroll_by(&mut self, request: OverScrollRequest) -> OverScrollResult {
        let result = over_scroll_by(&request);
        self.scroll_to(result.scroll_x);
        result
    }
}
