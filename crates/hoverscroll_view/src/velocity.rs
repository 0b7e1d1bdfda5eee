//! Pointer velocity estimation
//!
//! Keeps a small ring of (time, x) samples for one gesture and fits a
//! recency-weighted least-squares line through the recent ones.

use hoverscroll_platform::{TouchAction, TouchEvent};

/// Ring buffer size for velocity tracking samples
const HISTORY_SIZE: usize = 20;

/// Only samples within this window of the newest one are considered
const HORIZON_MS: u64 = 100;

/// A pause this long between samples means the pointer stopped
const ASSUME_STOPPED_MS: u64 = 40;

/// Per-sample weight falloff, newest first
const RECENCY_DECAY: f32 = 0.95;

#[derive(Clone, Copy, Debug, Default)]
struct Sample {
    time_ms: u64,
    x: f32,
}

/// Horizontal velocity estimator for a single gesture
#[derive(Clone, Debug)]
pub struct VelocityTracker {
    samples: [Option<Sample>; HISTORY_SIZE],
    /// Slot of the newest sample
    index: usize,
    x_velocity: f32,
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            index: 0,
            x_velocity: 0.0,
        }
    }

    /// Record a touch sample; cancel events carry no position and are ignored
    pub fn add_movement(&mut self, event: &TouchEvent) {
        if event.action == TouchAction::Cancel {
            return;
        }
        self.add_sample(event.time_ms, event.x);
    }

    pub fn add_sample(&mut self, time_ms: u64, x: f32) {
        self.index = (self.index + 1) % HISTORY_SIZE;
        self.samples[self.index] = Some(Sample { time_ms, x });
    }

    /// Forget every sample
    pub fn clear(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.index = 0;
        self.x_velocity = 0.0;
    }

    /// Estimate velocity in px per `units` ms, clamped to `±max_velocity`
    ///
    /// `units = 1000` yields px/s. The result is read back with
    /// [`x_velocity`](Self::x_velocity).
    pub fn compute_current_velocity(&mut self, units: u32, max_velocity: f32) {
        let per_ms = self.estimate_per_ms();
        let max = max_velocity.abs();
        self.x_velocity = (per_ms * units as f32).clamp(-max, max);
    }

    /// Last value produced by [`compute_current_velocity`](Self::compute_current_velocity)
    pub fn x_velocity(&self) -> f32 {
        self.x_velocity
    }

    fn estimate_per_ms(&self) -> f32 {
        let Some(newest) = self.samples[self.index] else {
            return 0.0;
        };

        // Walk backwards from the newest sample, collecting (age, x) pairs.
        let mut points = [(0.0f32, 0.0f32); HISTORY_SIZE];
        let mut count = 0;
        let mut slot = self.index;
        let mut previous_time = newest.time_ms;

        while count < HISTORY_SIZE {
            let Some(sample) = self.samples[slot] else {
                break;
            };
            let age = newest.time_ms.saturating_sub(sample.time_ms);
            let gap = previous_time.saturating_sub(sample.time_ms);
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }

            points[count] = (-(age as f32), sample.x);
            count += 1;
            previous_time = sample.time_ms;
            slot = if slot == 0 { HISTORY_SIZE - 1 } else { slot - 1 };
        }

        if count < 2 {
            return 0.0;
        }

        // Weighted linear regression x = a + b*t; velocity is b.
        let mut sum_w = 0.0f32;
        let mut sum_t = 0.0f32;
        let mut sum_x = 0.0f32;
        let mut sum_tt = 0.0f32;
        let mut sum_tx = 0.0f32;
        let mut weight = 1.0f32;

        for &(t, x) in &points[..count] {
            sum_w += weight;
            sum_t += weight * t;
            sum_x += weight * x;
            sum_tt += weight * t * t;
            sum_tx += weight * t * x;
            weight *= RECENCY_DECAY;
        }

        let denom = sum_w * sum_tt - sum_t * sum_t;
        if denom.abs() < f32::EPSILON {
            return 0.0;
        }
        (sum_w * sum_tx - sum_t * sum_x) / denom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker_with(samples: &[(u64, f32)]) -> VelocityTracker {
        let mut tracker = VelocityTracker::new();
        for &(t, x) in samples {
            tracker.add_sample(t, x);
        }
        tracker
    }

    #[test]
    fn test_empty_tracker_returns_zero() {
        let mut tracker = VelocityTracker::new();
        tracker.compute_current_velocity(1000, 8_000.0);
        assert_eq!(tracker.x_velocity(), 0.0);
    }

    #[test]
    fn test_single_sample_returns_zero() {
        let mut tracker = tracker_with(&[(0, 100.0)]);
        tracker.compute_current_velocity(1000, 8_000.0);
        assert_eq!(tracker.x_velocity(), 0.0);
    }

    #[test]
    fn test_constant_velocity() {
        // 10 px every 10 ms leftwards = -1000 px/s
        let mut tracker = tracker_with(&[(0, 300.0), (10, 290.0), (20, 280.0), (30, 270.0)]);
        tracker.compute_current_velocity(1000, 8_000.0);
        assert!(
            (tracker.x_velocity() + 1_000.0).abs() < 1.0,
            "got {}",
            tracker.x_velocity()
        );
    }

    #[test]
    fn test_velocity_is_capped() {
        let mut tracker = tracker_with(&[(0, 0.0), (10, 500.0), (20, 1_000.0)]);
        tracker.compute_current_velocity(1000, 8_000.0);
        assert_eq!(tracker.x_velocity(), 8_000.0);
    }

    #[test]
    fn test_pause_before_release_means_stopped() {
        let mut tracker = tracker_with(&[(0, 300.0), (10, 250.0), (20, 200.0), (120, 200.0)]);
        tracker.compute_current_velocity(1000, 8_000.0);
        assert_eq!(tracker.x_velocity(), 0.0);
    }

    #[test]
    fn test_old_samples_fall_outside_horizon() {
        // Fast early motion, then a slow steady drag for the last 100ms
        let mut samples = vec![(0, 0.0), (10, 200.0), (20, 400.0)];
        for i in 0..=10u64 {
            samples.push((30 + i * 10, 400.0 + i as f32 * 5.0));
        }
        let mut tracker = tracker_with(&samples);
        tracker.compute_current_velocity(1000, 8_000.0);
        assert!((tracker.x_velocity() - 500.0).abs() < 1.0);
    }

    #[test]
    fn test_clear_forgets_samples() {
        let mut tracker = tracker_with(&[(0, 0.0), (10, 100.0)]);
        tracker.clear();
        tracker.compute_current_velocity(1000, 8_000.0);
        assert_eq!(tracker.x_velocity(), 0.0);
    }

    #[test]
    fn test_cancel_is_not_a_sample() {
        let mut tracker = VelocityTracker::new();
        tracker.add_movement(&TouchEvent::down(100.0, 0));
        tracker.add_movement(&TouchEvent::cancel(10));
        tracker.compute_current_velocity(1000, 8_000.0);
        assert_eq!(tracker.x_velocity(), 0.0);
    }
}
