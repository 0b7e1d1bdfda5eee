//! Horizontal overscroll touch controller
//!
//! Turns a stream of touch samples into scroll requests against a
//! [`ScrollHost`], and drives a [`ScrollAnimator`] for fling and spring-back
//! once the pointer lifts.
//!
//! # Behavior
//!
//! - **Slop**: a press only becomes a drag once the pointer has travelled more
//!   than `touch_slop` from where it went down; the slop itself is not scrolled
//! - **Drag**: every later move scrolls by the raw delta, with an elastic band of
//!   `over_scroll_distance` past either edge
//! - **Fling**: on release faster than `min_fling_speed`, the content keeps
//!   going in the direction it was pushed and decelerates
//! - **Edges**: while settling the band is `over_fling_distance`; hitting its end
//!   switches to a spring-back onto the nearest edge
//! - **Catch**: touching a running animation stops it where it is; the touch is
//!   then a fresh drag candidate

use hoverscroll_animation::{AnimationMode, OverScroller, ScrollAnimator};
use hoverscroll_platform::{
    OverScrollRequest, ScrollHost, TouchAction, TouchEvent, ViewConfiguration,
};
use tracing::{debug, trace, warn};

use crate::state::{gesture_events, GestureState, StateTransitions};
use crate::velocity::VelocityTracker;

/// Velocity normalization window: px per second
const VELOCITY_UNITS: u32 = 1000;

/// State that only exists while a pointer is down
///
/// Opened on touch-down and dropped on touch-up or cancel, which releases the
/// velocity samples along with it.
#[derive(Debug)]
struct TouchSession {
    /// Pointer x at the last applied scroll (the down position until dragging)
    last_x: f32,
    tracker: VelocityTracker,
}

impl TouchSession {
    fn new(x: f32) -> Self {
        Self {
            last_x: x,
            tracker: VelocityTracker::new(),
        }
    }
}

fn advance(state: &mut GestureState, event: u32) {
    if let Some(next) = state.on_event(event) {
        trace!(from = ?*state, to = ?next, event, "gesture transition");
        *state = next;
    }
}

/// Touch-to-scroll state machine for a horizontally scrolling view
#[derive(Debug)]
pub struct OverscrollTouchController<A: ScrollAnimator = OverScroller> {
    config: ViewConfiguration,
    /// None when the host could not supply an animator; the controller is inert
    animator: Option<A>,
    session: Option<TouchSession>,
    state: GestureState,
}

impl OverscrollTouchController<OverScroller> {
    /// Controller backed by the reference [`OverScroller`]
    pub fn with_config(config: ViewConfiguration) -> Self {
        Self::new(config, OverScroller::default())
    }
}

impl<A: ScrollAnimator> OverscrollTouchController<A> {
    pub fn new(config: ViewConfiguration, animator: A) -> Self {
        Self {
            config,
            animator: Some(animator),
            session: None,
            state: GestureState::Idle,
        }
    }

    /// Controller without an animator; every handler is a no-op
    pub fn inert(config: ViewConfiguration) -> Self {
        Self {
            config,
            animator: None,
            session: None,
            state: GestureState::Idle,
        }
    }

    pub fn config(&self) -> &ViewConfiguration {
        &self.config
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn animator(&self) -> Option<&A> {
        self.animator.as_ref()
    }

    pub fn is_inert(&self) -> bool {
        self.animator.is_none()
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    /// A fling or spring-back is running
    pub fn is_settling(&self) -> bool {
        self.state.is_settling()
    }

    // =========================================================================
    // Touch input
    // =========================================================================

    /// Handle one touch sample
    ///
    /// Returns true when the event was consumed; an inert controller consumes
    /// nothing.
    pub fn on_touch_event<H: ScrollHost + ?Sized>(
        &mut self,
        event: &TouchEvent,
        host: &mut H,
    ) -> bool {
        if self.animator.is_none() {
            if event.action == TouchAction::Down {
                warn!("touch ignored: no scroll animator available");
            }
            return false;
        }

        match event.action {
            TouchAction::Down => self.on_down(event, host),
            TouchAction::Move => self.on_move(event, host),
            TouchAction::Up => self.on_up(event, host),
            TouchAction::Cancel => self.on_cancel(host),
        }
        true
    }

    fn on_down<H: ScrollHost + ?Sized>(&mut self, event: &TouchEvent, host: &mut H) {
        if let Some(animator) = self.animator.as_mut() {
            if !animator.is_finished() {
                debug!(
                    scroll_x = host.scroll_x(),
                    velocity = animator.curr_velocity(),
                    "caught running animation"
                );
                animator.abort_animation();
            }
        }

        // A caught animation leaves a drag candidate; slop still applies
        advance(&mut self.state, gesture_events::TOUCH_DOWN);

        let mut session = TouchSession::new(event.x);
        session.tracker.add_movement(event);
        self.session = Some(session);
    }

    fn on_move<H: ScrollHost + ?Sized>(&mut self, event: &TouchEvent, host: &mut H) {
        if self.session.is_none() {
            // Move without a down: start the session here
            self.on_down(event, host);
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.tracker.add_movement(event);

        let mut delta_x = session.last_x - event.x;
        let slop = self.config.touch_slop as f32;

        if self.state == GestureState::Pressed && delta_x.abs() > slop {
            host.request_disallow_intercept();
            delta_x -= slop.copysign(delta_x);
            advance(&mut self.state, gesture_events::SLOP_EXCEEDED);
            debug!(x = event.x, "drag started");
        }

        if self.state.is_dragging() {
            let request = OverScrollRequest::horizontal(
                delta_x as i32,
                host.scroll_x(),
                self.config.scroll_range,
                self.config.over_scroll_distance,
                true,
            );
            let result = host.over_scroll_by(request);
            session.last_x = event.x;
            trace!(
                delta_x = request.delta_x,
                scroll_x = result.scroll_x,
                clamped = result.clamped_x,
                "drag"
            );
        }
    }

    fn on_up<H: ScrollHost + ?Sized>(&mut self, event: &TouchEvent, host: &mut H) {
        let Some(mut session) = self.session.take() else {
            return;
        };
        if !self.state.is_dragging() {
            advance(&mut self.state, gesture_events::TOUCH_UP);
            return;
        }

        session.tracker.add_movement(event);
        session
            .tracker
            .compute_current_velocity(VELOCITY_UNITS, self.config.max_fling_speed as f32);
        let velocity = session.tracker.x_velocity();
        drop(session);

        if velocity.abs() > self.config.min_fling_speed as f32 {
            // Pointer moving left pushes the content forward
            self.fling(-velocity, host);
        } else if !self.spring_back(host) {
            advance(&mut self.state, gesture_events::TOUCH_UP);
            debug!(velocity, "released without fling");
        }
    }

    fn on_cancel<H: ScrollHost + ?Sized>(&mut self, host: &mut H) {
        if self.session.take().is_none() {
            return;
        }
        if !(self.state.is_dragging() && self.spring_back(host)) {
            advance(&mut self.state, gesture_events::TOUCH_CANCEL);
        }
        debug!("gesture cancelled");
    }

    // =========================================================================
    // Animation
    // =========================================================================

    /// Start a fling from the host's current offset with `velocity_x` px/s
    ///
    /// Positive velocity scrolls toward `scroll_range`. Ignored while a
    /// pointer is down.
    pub fn fling<H: ScrollHost + ?Sized>(&mut self, velocity_x: f32, host: &mut H) {
        if self.session.is_some() {
            return;
        }
        let Some(animator) = self.animator.as_mut() else {
            return;
        };

        animator.fling(host.scroll_x(), velocity_x, 0, self.config.scroll_range);
        if animator.is_finished() {
            advance(&mut self.state, gesture_events::TOUCH_UP);
            return;
        }

        let event = match animator.mode() {
            Some(AnimationMode::SpringBack) => gesture_events::SPRING_BACK,
            _ => gesture_events::FLING,
        };
        advance(&mut self.state, event);
        debug!(velocity_x, final_x = animator.final_x(), "fling");
        host.invalidate();
    }

    /// Spring back into range if the host's offset is outside it
    ///
    /// Returns true if an animation was started. Ignored while a pointer is
    /// down.
    pub fn spring_back<H: ScrollHost + ?Sized>(&mut self, host: &mut H) -> bool {
        if self.session.is_some() {
            return false;
        }
        let Some(animator) = self.animator.as_mut() else {
            return false;
        };

        let scroll_x = host.scroll_x();
        if !animator.spring_back(scroll_x, 0, self.config.scroll_range) {
            return false;
        }
        advance(&mut self.state, gesture_events::SPRING_BACK);
        debug!(scroll_x, target = animator.final_x(), "spring-back");
        host.invalidate();
        true
    }

    /// Stop any running animation where it is
    pub fn abort_animation(&mut self) {
        if let Some(animator) = self.animator.as_mut() {
            animator.abort_animation();
        }
        advance(&mut self.state, gesture_events::SETTLED);
    }

    /// Advance the running animation by `dt` seconds (one display frame)
    ///
    /// Returns true while an animation is still running and the host should
    /// schedule another frame.
    pub fn compute_scroll<H: ScrollHost + ?Sized>(&mut self, dt: f32, host: &mut H) -> bool {
        let Some(animator) = self.animator.as_mut() else {
            return false;
        };

        if !animator.compute_scroll_offset(dt) {
            advance(&mut self.state, gesture_events::SETTLED);
            return false;
        }

        let range = self.config.scroll_range;
        let old_x = host.scroll_x();
        let x = animator.curr_x();

        if old_x != x {
            let request = OverScrollRequest::horizontal(
                x - old_x,
                old_x,
                range,
                self.config.over_fling_distance,
                false,
            );
            let result = host.over_scroll_by(request);
            trace!(x, scroll_x = result.scroll_x, clamped = result.clamped_x, "settle tick");

            if result.clamped_x && animator.spring_back(result.scroll_x, 0, range) {
                debug!(scroll_x = result.scroll_x, "edge reached, spring-back");
            }
        }

        if animator.is_finished() {
            let scroll_x = host.scroll_x();
            if animator.spring_back(scroll_x, 0, range) {
                debug!(scroll_x, "fling ended past edge, spring-back");
            } else {
                advance(&mut self.state, gesture_events::SETTLED);
                debug!(scroll_x, "settled");
            }
        }

        host.invalidate();
        !animator.is_finished()
    }
}
