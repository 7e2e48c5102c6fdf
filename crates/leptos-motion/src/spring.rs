//! Damped Spring
//!
//! One-dimensional mass/spring/damper driven toward a target value.
//! Used both to smooth a continuously changing input (scroll progress)
//! and to bounce a released drag back inside its constraints.

use serde::{Deserialize, Serialize};

/// Integration substep in seconds
const SUBSTEP_SECS: f64 = 1.0 / 240.0;

/// Frames longer than this (tab in background, debugger pause) are truncated
const MAX_FRAME_SECS: f64 = 0.064;

/// Spring parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Distance from target under which the spring may come to rest
    pub rest_delta: f64,
    /// Speed under which the spring may come to rest
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
    pub const fn new(stiffness: f64, damping: f64, rest_delta: f64, rest_speed: f64) -> Self {
        Self { stiffness, damping, mass: 1.0, rest_delta, rest_speed }
    }

    /// Damping ratio; above 1.0 the spring never overshoots
    pub fn damping_ratio(&self) -> f64 {
        let critical = 2.0 * (self.stiffness * self.mass).sqrt();
        if critical > 0.0 { self.damping / critical } else { 0.0 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
    at_rest: bool,
}

impl Spring {
    /// Spring resting at `value`
    pub fn new(config: SpringConfig, value: f64) -> Self {
        Self { config, value, velocity: 0.0, target: value, at_rest: true }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    /// Retarget without resetting velocity, so a new input continues
    /// from wherever the spring currently is.
    pub fn set_target(&mut self, target: f64) {
        if !target.is_finite() {
            return;
        }
        if target != self.target {
            self.target = target;
            self.at_rest = false;
        }
    }

    /// Launch toward `target` with an initial velocity
    pub fn launch(&mut self, target: f64, velocity: f64) {
        self.set_target(target);
        self.velocity = if velocity.is_finite() { velocity } else { 0.0 };
        self.at_rest = false;
    }

    /// Place the spring at `value` and stop it there
    pub fn jump_to(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
        self.at_rest = true;
    }

    /// Advance by `dt` seconds. Returns true while still moving.
    pub fn step(&mut self, dt: f64) -> bool {
        if self.at_rest {
            return false;
        }
        let mass = if self.config.mass > 0.0 { self.config.mass } else { 1.0 };
        let mut remaining = if dt.is_finite() { dt.clamp(0.0, MAX_FRAME_SECS) } else { 0.0 };
        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP_SECS);
            let displacement = self.value - self.target;
            let accel = (-self.config.stiffness * displacement - self.config.damping * self.velocity) / mass;
            // semi-implicit Euler
            self.velocity += accel * h;
            self.value += self.velocity * h;
            remaining -= h;
        }

        if (self.value - self.target).abs() <= self.config.rest_delta
            && self.velocity.abs() <= self.config.rest_speed
        {
            self.jump_to(self.target);
        }
        !self.at_rest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROGRESS: SpringConfig = SpringConfig::new(100.0, 30.0, 0.001, 0.01);
    const BOUNCE: SpringConfig = SpringConfig::new(500.0, 10.0, 0.5, 10.0);

    fn settle(spring: &mut Spring, max_secs: f64) -> f64 {
        let mut t = 0.0;
        while spring.step(1.0 / 60.0) {
            t += 1.0 / 60.0;
            assert!(t < max_secs, "spring did not settle within {max_secs}s");
        }
        t
    }

    #[test]
    fn test_new_spring_is_at_rest() {
        let mut spring = Spring::new(PROGRESS, 0.3);
        assert!(spring.is_at_rest());
        assert!(!spring.step(0.016));
        assert_eq!(spring.value(), 0.3);
    }

    #[test]
    fn test_progress_spring_settles_without_overshoot() {
        assert!(PROGRESS.damping_ratio() > 1.0);
        let mut spring = Spring::new(PROGRESS, 0.0);
        spring.set_target(1.0);
        let mut previous = 0.0;
        for _ in 0..600 {
            spring.step(1.0 / 60.0);
            assert!(spring.value() >= previous - 1e-9);
            assert!(spring.value() <= 1.0 + PROGRESS.rest_delta);
            previous = spring.value();
        }
        assert!(spring.is_at_rest());
        assert_eq!(spring.value(), 1.0);
    }

    #[test]
    fn test_bounce_spring_overshoots_then_rests_on_target() {
        let mut spring = Spring::new(BOUNCE, 220.0);
        spring.set_target(150.0);
        let mut min_seen = f64::MAX;
        while spring.step(1.0 / 60.0) {
            min_seen = min_seen.min(spring.value());
        }
        assert!(min_seen < 150.0, "underdamped spring should pass the target");
        assert_eq!(spring.value(), 150.0);
    }

    #[test]
    fn test_retarget_keeps_velocity() {
        let mut spring = Spring::new(PROGRESS, 0.0);
        spring.set_target(1.0);
        spring.step(0.05);
        let v = spring.velocity();
        assert!(v > 0.0);
        spring.set_target(0.5);
        assert_eq!(spring.velocity(), v);
        settle(&mut spring, 10.0);
        assert_eq!(spring.value(), 0.5);
    }

    #[test]
    fn test_long_frame_is_truncated_and_non_finite_ignored() {
        let mut spring = Spring::new(PROGRESS, 0.0);
        spring.set_target(f64::NAN);
        assert!(spring.is_at_rest());
        spring.set_target(1.0);
        spring.step(10.0);
        assert!(spring.value().is_finite());
        assert!(spring.value() < 1.0);
    }
}
