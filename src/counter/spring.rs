// src/counter/spring.rs
// =============================================================================
// A damped spring that moves a single number toward a target over time.
//
// Each digit strip owns one Spring. When the counter's value changes, the
// strip's target changes and the spring carries the strip there smoothly,
// keeping its velocity if it was already moving.
//
// Physics (per unit mass):
//   force = -stiffness * (x - target) - damping * velocity
//
// Integration is semi-implicit Euler with small fixed sub-steps, which is
// stable for the stiffness/damping ranges a UI uses.
//
// The state is the displacement from the target, not the absolute position.
// Strip positions can be huge (a ones strip of 1e15 sits at 1e15) and at
// that size f64 cannot hold a position within rest_delta of the target.
// The displacement stays small, so the spring always comes to rest.
// =============================================================================

use std::time::Duration;

// Longest single integration step, in seconds
const MAX_SUBSTEP: f64 = 1.0 / 240.0;

/// Tuning for a Spring
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Distance from the target under which the spring may stop
    pub rest_delta: f64,
    /// Speed under which the spring may stop
    pub rest_speed: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 10.0,
            mass: 1.0,
            rest_delta: 0.01,
            rest_speed: 0.01,
        }
    }
}

impl SpringConfig {
    /// Fastest response without overshoot
    pub fn critically_damped(stiffness: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping: 2.0 * (stiffness * mass).sqrt(),
            mass,
            ..Self::default()
        }
    }
}

/// An animated scalar
#[derive(Debug, Clone)]
pub struct Spring {
    config: SpringConfig,
    target: f64,
    /// value - target
    displacement: f64,
    velocity: f64,
}

impl Spring {
    /// A spring resting at `initial`
    pub fn new(initial: f64) -> Self {
        Self::with_config(initial, SpringConfig::default())
    }

    pub fn with_config(initial: f64, config: SpringConfig) -> Self {
        Self {
            config,
            target: initial,
            displacement: 0.0,
            velocity: 0.0,
        }
    }

    pub fn value(&self) -> f64 {
        self.target + self.displacement
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn config(&self) -> &SpringConfig {
        &self.config
    }

    /// Start moving toward a new target; current velocity is kept
    pub fn set_target(&mut self, target: f64) {
        // Subtract the targets first; nearby large values differ exactly
        self.displacement += self.target - target;
        self.target = target;
    }

    pub fn is_at_rest(&self) -> bool {
        self.displacement.abs() <= self.config.rest_delta
            && self.velocity.abs() <= self.config.rest_speed
    }

    fn settle(&mut self) {
        self.displacement = 0.0;
        self.velocity = 0.0;
    }

    // Advances the spring by `dt`
    //
    // Returns true while the spring is still moving. Once it comes to rest
    // it snaps exactly onto the target.
    pub fn step(&mut self, dt: Duration) -> bool {
        if self.is_at_rest() {
            self.settle();
            return false;
        }

        let mut remaining = dt.as_secs_f64();
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUBSTEP);
            let force =
                -self.config.stiffness * self.displacement - self.config.damping * self.velocity;
            let acceleration = force / self.config.mass;

            self.velocity += acceleration * h;
            self.displacement += self.velocity * h;
            remaining -= h;
        }

        if self.is_at_rest() {
            self.settle();
            return false;
        }

        true
    }
}
