//! Spring physics for spring-back
//!
//! RK4-integrated damped spring. The scroller drives it from an out-of-range
//! offset to the nearest legal edge.

/// Configuration for a spring animation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    /// Distance from the target under which the spring may come to rest
    pub rest_displacement: f32,
    /// Speed (units/s) under which the spring may come to rest
    pub rest_velocity: f32,
}

impl SpringConfig {
    /// Create a new spring configuration with pixel-scale rest thresholds
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            rest_displacement: 0.5,
            rest_velocity: 5.0,
        }
    }

    /// Critically damped spring with the given stiffness and unit mass
    pub fn critically_damped(stiffness: f32) -> Self {
        let mut config = Self::new(stiffness, 0.0, 1.0);
        config.damping = config.critical_damping();
        config
    }

    /// Edge correction: returns quickly without overshooting past the edge
    pub fn spring_back() -> Self {
        Self::critically_damped(400.0)
    }

    /// Calculate critical damping for this spring's stiffness and mass
    pub fn critical_damping(&self) -> f32 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    /// Check if the spring is underdamped (will oscillate)
    pub fn is_underdamped(&self) -> bool {
        self.damping < self.critical_damping()
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::spring_back()
    }
}

/// A damped spring pulling `value` toward `target`
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    /// Spring at rest on `initial`
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    /// Spring released at `from`, heading for `to`
    pub fn between(config: SpringConfig, from: f32, to: f32) -> Self {
        let mut spring = Self::new(config, from);
        spring.target = to;
        spring
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < self.config.rest_displacement
            && self.velocity.abs() < self.config.rest_velocity
    }

    /// Advance by `dt` seconds; snaps onto the target once settled
    pub fn step(&mut self, dt: f32) {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        let (x, v) = (self.value, self.velocity);
        let (dx1, dv1) = self.derivative(x, v);
        let (dx2, dv2) = self.derivative(x + dx1 * dt * 0.5, v + dv1 * dt * 0.5);
        let (dx3, dv3) = self.derivative(x + dx2 * dt * 0.5, v + dv2 * dt * 0.5);
        let (dx4, dv4) = self.derivative(x + dx3 * dt, v + dv3 * dt);

        self.value += (dx1 + 2.0 * (dx2 + dx3) + dx4) * dt / 6.0;
        self.velocity += (dv1 + 2.0 * (dv2 + dv3) + dv4) * dt / 6.0;

        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }

    /// (dx/dt, dv/dt) at the given state
    fn derivative(&self, x: f32, v: f32) -> (f32, f32) {
        let force = -self.config.stiffness * (x - self.target) - self.config.damping * v;
        (v, force / self.config.mass)
    }
}
