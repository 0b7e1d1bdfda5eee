//! Exponential fling decay
//!
//! Velocity falls off as `v(t) = v0 * e^(-k t)`, so position approaches
//! `start + v0 / k` asymptotically. The fling is over once the speed drops
//! under the configured threshold.

/// Friction and stop threshold for a fling
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecayConfig {
    /// Decay rate `k` (1/s); higher stops sooner
    pub friction: f32,
    /// Speed (px/s) below which the fling ends
    pub velocity_threshold: f32,
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            friction: 4.2,
            velocity_threshold: 20.0,
        }
    }
}

/// A single fling in progress
#[derive(Clone, Copy, Debug)]
pub struct FlingDecay {
    config: DecayConfig,
    start: f32,
    initial_velocity: f32,
    elapsed: f32,
}

impl FlingDecay {
    pub fn new(config: DecayConfig, start: f32, initial_velocity: f32) -> Self {
        Self {
            config,
            start,
            initial_velocity,
            elapsed: 0.0,
        }
    }

    /// Position `t` seconds after release
    pub fn position_at(&self, t: f32) -> f32 {
        let k = self.config.friction;
        self.start + self.initial_velocity / k * (1.0 - (-k * t).exp())
    }

    /// Velocity `t` seconds after release
    pub fn velocity_at(&self, t: f32) -> f32 {
        self.initial_velocity * (-self.config.friction * t).exp()
    }

    /// Time until the speed drops under the threshold
    pub fn duration(&self) -> f32 {
        let speed = self.initial_velocity.abs();
        if speed <= self.config.velocity_threshold {
            return 0.0;
        }
        (speed / self.config.velocity_threshold).ln() / self.config.friction
    }

    /// Resting position at the end of [`duration`](Self::duration)
    pub fn final_position(&self) -> f32 {
        self.position_at(self.duration())
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Advance by `dt` seconds; returns the new position
    pub fn step(&mut self, dt: f32) -> f32 {
        self.elapsed = (self.elapsed + dt).min(self.duration());
        self.position_at(self.elapsed)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slow_fling_finishes_immediately() {
        let decay = FlingDecay::new(DecayConfig::default(), 100.0, 10.0);
        assert_eq!(decay.duration(), 0.0);
        assert!(decay.is_finished());
        assert_eq!(decay.final_position(), 100.0);
    }

    #[test]
    fn test_fling_decelerates_monotonically() {
        let mut decay = FlingDecay::new(DecayConfig::default(), 0.0, 3_000.0);
        let mut last = 0.0;
        let mut last_step = f32::MAX;

        while !decay.is_finished() {
            let position = decay.step(1.0 / 60.0);
            let travelled = position - last;
            assert!(travelled >= 0.0);
            assert!(travelled <= last_step + 1e-3);
            last_step = travelled;
            last = position;
        }

        assert!((last - decay.final_position()).abs() < 1e-3);
        assert!(last < 3_000.0 / 4.2);
    }

    #[test]
    fn test_negative_velocity_moves_backwards() {
        let decay = FlingDecay::new(DecayConfig::default(), 500.0, -2_000.0);
        assert!(decay.final_position() < 500.0);
        assert!(decay.velocity_at(0.1) < 0.0);
    }
}
