//! Scroll animator capability and the reference over-scroller
//!
//! A [`ScrollAnimator`] owns the simulated scroll position while a fling or a
//! spring-back is running. Fling and spring-back are mutually exclusive:
//! starting one replaces whatever was running before.

use tracing::{debug, trace};

use crate::decay::{DecayConfig, FlingDecay};
use crate::spring::{Spring, SpringConfig};

/// Which animation an animator is currently running
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationMode {
    /// Post-release deceleration
    Fling,
    /// Correction back into the legal range
    SpringBack,
}

/// Host-provided fling/spring simulator
pub trait ScrollAnimator {
    /// Start a decelerating fling from `start_x` with `velocity_x` px/s
    ///
    /// `min_x..=max_x` is the legal range; a fling that starts outside it
    /// springs back instead.
    fn fling(&mut self, start_x: i32, velocity_x: f32, min_x: i32, max_x: i32);

    /// Animate from `start_x` back into `min_x..=max_x`
    ///
    /// Returns false, leaving the animator finished, when `start_x` is
    /// already in range.
    fn spring_back(&mut self, start_x: i32, min_x: i32, max_x: i32) -> bool;

    /// Stop immediately, leaving the current position where it is
    fn abort_animation(&mut self);

    /// Advance by `dt` seconds
    ///
    /// Returns false when no animation was running; true otherwise, including
    /// on the tick that finishes the animation.
    fn compute_scroll_offset(&mut self, dt: f32) -> bool;

    /// Current simulated position
    fn curr_x(&self) -> i32;

    /// Where the running animation will come to rest
    fn final_x(&self) -> i32;

    /// Speed of the running animation in px/s, for diagnostics
    fn curr_velocity(&self) -> f32 {
        0.0
    }

    fn is_finished(&self) -> bool;

    /// Running animation, or None when finished
    fn mode(&self) -> Option<AnimationMode>;
}

/// Tuning for [`OverScroller`]
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ScrollerConfig {
    pub decay: DecayConfig,
    pub spring: SpringConfig,
}

#[derive(Clone, Copy, Debug)]
enum Motion {
    Idle,
    Fling(FlingDecay),
    SpringBack(Spring),
}

/// Reference [`ScrollAnimator`]: exponential fling decay plus spring-back
#[derive(Clone, Debug)]
pub struct OverScroller {
    config: ScrollerConfig,
    motion: Motion,
    curr_x: f32,
    final_x: f32,
}

impl Default for OverScroller {
    fn default() -> Self {
        Self::new(ScrollerConfig::default())
    }
}

impl OverScroller {
    pub fn new(config: ScrollerConfig) -> Self {
        Self {
            config,
            motion: Motion::Idle,
            curr_x: 0.0,
            final_x: 0.0,
        }
    }

    fn finish(&mut self) {
        self.motion = Motion::Idle;
        self.curr_x = self.final_x;
    }
}

impl ScrollAnimator for OverScroller {
    fn fling(&mut self, start_x: i32, velocity_x: f32, min_x: i32, max_x: i32) {
        if start_x < min_x || start_x > max_x {
            self.spring_back(start_x, min_x, max_x);
            return;
        }

        let decay = FlingDecay::new(self.config.decay, start_x as f32, velocity_x);
        self.curr_x = start_x as f32;
        self.final_x = decay.final_position();

        if decay.is_finished() {
            self.motion = Motion::Idle;
            return;
        }

        debug!(
            start_x,
            velocity_x,
            final_x = self.final_x,
            duration = decay.duration(),
            "fling started"
        );
        self.motion = Motion::Fling(decay);
    }

    fn spring_back(&mut self, start_x: i32, min_x: i32, max_x: i32) -> bool {
        self.curr_x = start_x as f32;

        let target = if start_x < min_x {
            min_x
        } else if start_x > max_x {
            max_x
        } else {
            self.final_x = start_x as f32;
            self.motion = Motion::Idle;
            return false;
        };

        debug!(start_x, target, "spring-back started");
        self.final_x = target as f32;
        self.motion = Motion::SpringBack(Spring::between(
            self.config.spring,
            start_x as f32,
            target as f32,
        ));
        true
    }

    fn abort_animation(&mut self) {
        if !self.is_finished() {
            trace!(curr_x = self.curr_x, "animation aborted");
        }
        self.final_x = self.curr_x;
        self.motion = Motion::Idle;
    }

    fn compute_scroll_offset(&mut self, dt: f32) -> bool {
        match &mut self.motion {
            Motion::Idle => return false,
            Motion::Fling(decay) => {
                self.curr_x = decay.step(dt);
                if decay.is_finished() {
                    self.finish();
                }
            }
            Motion::SpringBack(spring) => {
                spring.step(dt);
                self.curr_x = spring.value();
                if spring.is_settled() {
                    self.finish();
                }
            }
        }
        true
    }

    fn curr_x(&self) -> i32 {
        self.curr_x.round() as i32
    }

    fn final_x(&self) -> i32 {
        self.final_x.round() as i32
    }

    fn curr_velocity(&self) -> f32 {
        match &self.motion {
            Motion::Idle => 0.0,
            Motion::Fling(decay) => decay.velocity_at(decay.elapsed()),
            Motion::SpringBack(spring) => spring.velocity(),
        }
    }

    fn is_finished(&self) -> bool {
        matches!(self.motion, Motion::Idle)
    }

    fn mode(&self) -> Option<AnimationMode> {
        match self.motion {
            Motion::Idle => None,
            Motion::Fling(_) => Some(AnimationMode::Fling),
            Motion::SpringBack(_) => Some(AnimationMode::SpringBack),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    fn run_to_rest(scroller: &mut OverScroller) -> usize {
        let mut frames = 0;
        while scroller.compute_scroll_offset(FRAME) {
            frames += 1;
            assert!(frames < 10_000, "animation never settled");
        }
        frames
    }

    #[test]
    fn test_idle_scroller_reports_nothing() {
        let mut scroller = OverScroller::default();
        assert!(scroller.is_finished());
        assert!(!scroller.compute_scroll_offset(FRAME));
        assert_eq!(scroller.mode(), None);
    }

    #[test]
    fn test_fling_runs_to_final_position() {
        let mut scroller = OverScroller::default();
        scroller.fling(100, 2_000.0, 0, 4_800);

        assert_eq!(scroller.mode(), Some(AnimationMode::Fling));
        let expected = scroller.final_x();
        assert!(expected > 100);

        let frames = run_to_rest(&mut scroller);
        assert!(frames > 1);
        assert!(scroller.is_finished());
        assert_eq!(scroller.curr_x(), expected);
    }

    #[test]
    fn test_fling_velocity_decays_to_zero() {
        let mut scroller = OverScroller::default();
        scroller.fling(0, -2_000.0, 0, 4_800);
        assert_eq!(scroller.curr_velocity(), -2_000.0);

        scroller.compute_scroll_offset(FRAME);
        let v = scroller.curr_velocity();
        assert!(v < 0.0 && v > -2_000.0);

        run_to_rest(&mut scroller);
        assert_eq!(scroller.curr_velocity(), 0.0);
    }

    #[test]
    fn test_fling_does_not_clamp() {
        let mut scroller = OverScroller::default();
        scroller.fling(20, -3_000.0, 0, 4_800);
        assert!(scroller.final_x() < 0);
    }

    #[test]
    fn test_fling_from_out_of_range_springs_back() {
        let mut scroller = OverScroller::default();
        scroller.fling(-30, 1_500.0, 0, 4_800);
        assert_eq!(scroller.mode(), Some(AnimationMode::SpringBack));
        assert_eq!(scroller.final_x(), 0);
    }

    #[test]
    fn test_spring_back_in_range_is_noop() {
        let mut scroller = OverScroller::default();
        assert!(!scroller.spring_back(250, 0, 4_800));
        assert!(scroller.is_finished());
        assert_eq!(scroller.curr_x(), 250);
    }

    #[test]
    fn test_spring_back_reaches_nearest_edge() {
        let mut scroller = OverScroller::default();
        assert!(scroller.spring_back(4_812, 0, 4_800));
        assert_eq!(scroller.final_x(), 4_800);

        run_to_rest(&mut scroller);
        assert_eq!(scroller.curr_x(), 4_800);
    }

    #[test]
    fn test_spring_back_replaces_fling() {
        let mut scroller = OverScroller::default();
        scroller.fling(0, 5_000.0, 0, 4_800);
        scroller.compute_scroll_offset(FRAME);
        assert!(scroller.spring_back(-8, 0, 4_800));
        assert_eq!(scroller.mode(), Some(AnimationMode::SpringBack));
    }

    #[test]
    fn test_abort_freezes_position() {
        let mut scroller = OverScroller::default();
        scroller.fling(0, 4_000.0, 0, 4_800);
        scroller.compute_scroll_offset(FRAME);
        scroller.compute_scroll_offset(FRAME);
        let x = scroller.curr_x();

        scroller.abort_animation();
        assert!(scroller.is_finished());
        assert_eq!(scroller.curr_x(), x);
        assert_eq!(scroller.final_x(), x);
        assert!(!scroller.compute_scroll_offset(FRAME));
    }
}
