//! Spring physics animation
//!
//! Two views of the same damped harmonic oscillator:
//!
//! - [`Spring`] is RK4-integrated and follows a moving target. Magnetic-follow
//!   uses it because the pointer changes the target every frame.
//! - [`SpringConfig::progress_at`] is the closed-form step response from rest.
//!   Descriptor sampling uses it so a spring-timed property has the same value
//!   at a given elapsed time no matter how the frames were sliced.

use serde::{Deserialize, Serialize};

/// Residual displacement below which a step response counts as settled
const SETTLE_THRESHOLD: f32 = 1e-3;
/// Upper bound on settle time, reached by undamped springs
const MAX_SETTLE_MS: u32 = 10_000;

/// Configuration for a spring animation
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    /// Create a new spring configuration
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// A spring with exactly critical damping: fastest settle, no overshoot
    pub fn critically_damped(stiffness: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping: 2.0 * (stiffness * mass).sqrt(),
            mass,
        }
    }

    /// A stiff, snappy spring (good for buttons)
    pub fn stiff() -> Self {
        Self {
            stiffness: 400.0,
            damping: 30.0,
            mass: 1.0,
        }
    }

    /// Bouncy press feedback for call-to-action buttons
    pub fn springy() -> Self {
        Self {
            stiffness: 400.0,
            damping: 15.0,
            mass: 1.0,
        }
    }

    /// Light hover response for skill tags
    pub fn light() -> Self {
        Self {
            stiffness: 300.0,
            damping: 20.0,
            mass: 1.0,
        }
    }

    /// Slow, heavy glide used for card slide-ins
    pub fn glide() -> Self {
        Self {
            stiffness: 60.0,
            damping: 20.0,
            mass: 0.8,
        }
    }

    /// Calculate critical damping for this spring's stiffness and mass
    pub fn critical_damping(&self) -> f32 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    /// Damping ratio ζ. 1.0 is critical.
    pub fn damping_ratio(&self) -> f32 {
        let critical = self.critical_damping();
        if critical > 0.0 {
            self.damping / critical
        } else {
            0.0
        }
    }

    /// Check if the spring is underdamped (will oscillate)
    pub fn is_underdamped(&self) -> bool {
        self.damping < self.critical_damping()
    }

    /// Check if the spring is critically damped (no oscillation, fastest settling)
    pub fn is_critically_damped(&self) -> bool {
        (self.damping - self.critical_damping()).abs() < 0.01
    }

    /// Check if the spring is overdamped (slow settling, no oscillation)
    pub fn is_overdamped(&self) -> bool {
        self.damping > self.critical_damping()
    }

    /// Natural angular frequency ω0 in rad/s
    fn natural_frequency(&self) -> f32 {
        if self.mass > 0.0 && self.stiffness > 0.0 {
            (self.stiffness / self.mass).sqrt()
        } else {
            0.0
        }
    }

    /// Remaining displacement of a unit step released from rest, `t` in seconds.
    ///
    /// Starts at 1.0 and decays toward 0.0.
    pub fn displacement_at(&self, t: f32) -> f32 {
        let w0 = self.natural_frequency();
        if w0 <= 0.0 || !t.is_finite() {
            return 0.0;
        }
        if t <= 0.0 {
            return 1.0;
        }
        let zeta = self.damping_ratio();

        if (zeta - 1.0).abs() < 1e-3 {
            (-w0 * t).exp() * (1.0 + w0 * t)
        } else if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let decay = (-zeta * w0 * t).exp();
            decay * ((wd * t).cos() + (zeta * w0 / wd) * (wd * t).sin())
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - root);
            let r2 = -w0 * (zeta + root);
            (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
        }
    }

    /// Progress of a unit step from rest, `elapsed_ms` in milliseconds.
    ///
    /// 0.0 at release, 1.0 at rest. Underdamped springs overshoot past 1.0.
    pub fn progress_at(&self, elapsed_ms: f32) -> f32 {
        1.0 - self.displacement_at(elapsed_ms / 1000.0)
    }

    /// Time until the step response stays within [`SETTLE_THRESHOLD`] of rest
    pub fn settle_time_ms(&self) -> u32 {
        let w0 = self.natural_frequency();
        if w0 <= 0.0 {
            return 0;
        }
        let zeta = self.damping_ratio();
        if zeta <= 0.0 {
            return MAX_SETTLE_MS;
        }

        if zeta < 1.0 - 1e-3 {
            // |d(t)| <= e^(-ζω0t) / sqrt(1 - ζ²)
            let bound = 1.0 / (1.0 - zeta * zeta).sqrt();
            let secs = (bound / SETTLE_THRESHOLD).ln() / (zeta * w0);
            return ((secs * 1000.0).ceil() as u32).min(MAX_SETTLE_MS);
        }

        // Critical and overdamped responses decay monotonically
        let mut ms = 0u32;
        while ms < MAX_SETTLE_MS {
            if self.displacement_at(ms as f32 / 1000.0) < SETTLE_THRESHOLD {
                return ms;
            }
            ms += 1;
        }
        MAX_SETTLE_MS
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::stiff()
    }
}

/// A spring-based animator
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump to `value` and stop. Used for interrupts.
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Check if the spring has settled (within epsilon of target with minimal velocity)
    pub fn is_settled(&self) -> bool {
        // Degrees and pixels at this scale are imperceptible
        const EPSILON: f32 = 0.01;
        const VELOCITY_EPSILON: f32 = 0.1;

        (self.value - self.target).abs() < EPSILON && self.velocity.abs() < VELOCITY_EPSILON
    }

    /// Step the spring simulation using RK4 integration, `dt` in seconds
    pub fn step(&mut self, dt: f32) {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        let k1_v = self.acceleration(self.value, self.velocity);
        let k1_x = self.velocity;

        let k2_v = self.acceleration(
            self.value + k1_x * dt * 0.5,
            self.velocity + k1_v * dt * 0.5,
        );
        let k2_x = self.velocity + k1_v * dt * 0.5;

        let k3_v = self.acceleration(
            self.value + k2_x * dt * 0.5,
            self.velocity + k2_v * dt * 0.5,
        );
        let k3_x = self.velocity + k2_v * dt * 0.5;

        let k4_v = self.acceleration(self.value + k3_x * dt, self.velocity + k3_v * dt);
        let k4_x = self.velocity + k3_v * dt;

        self.velocity += (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v) * dt / 6.0;
        self.value += (k1_x + 2.0 * k2_x + 2.0 * k3_x + k4_x) * dt / 6.0;

        // A blown-up integration must not leak into transforms
        if !self.value.is_finite() || !self.velocity.is_finite() {
            tracing::warn!("spring integration diverged, snapping to target");
            self.snap_to(self.target);
        }
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        let spring_force = -self.config.stiffness * (x - self.target);
        let damping_force = -self.config.damping * v;
        (spring_force + damping_force) / self.config.mass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spring_settles_to_target() {
        let mut spring = Spring::new(SpringConfig::stiff(), 0.0);
        spring.set_target(100.0);

        // Simulate for 2 seconds at 60fps
        for _ in 0..120 {
            spring.step(1.0 / 60.0);
        }

        assert!(spring.is_settled());
        assert!((spring.value() - 100.0).abs() < 0.01);
    }

    #[test]
    fn test_spring_inherits_velocity() {
        let mut spring = Spring::new(SpringConfig::springy(), 0.0);
        spring.set_target(100.0);

        for _ in 0..10 {
            spring.step(1.0 / 60.0);
        }

        let velocity = spring.velocity();
        assert!(velocity > 0.0);

        // Change target mid-flight - velocity should continue
        spring.set_target(50.0);
        assert_eq!(spring.velocity(), velocity);
    }

    #[test]
    fn test_snap_to_stops_motion() {
        let mut spring = Spring::new(SpringConfig::springy(), 0.0);
        spring.set_target(10.0);
        spring.step(1.0 / 60.0);
        spring.snap_to(0.0);
        assert_eq!(spring.value(), 0.0);
        assert_eq!(spring.velocity(), 0.0);
        assert!(spring.is_settled());
    }

    #[test]
    fn test_critically_damped_constructor() {
        let config = SpringConfig::critically_damped(150.0, 1.0);
        assert!(config.is_critically_damped());
        assert!((config.damping_ratio() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_presets_damping() {
        assert!(SpringConfig::springy().is_underdamped());
        assert!(SpringConfig::light().is_underdamped());
        // 60/20/0.8: critical damping is ~13.9, so the glide never overshoots
        assert!(SpringConfig::glide().is_overdamped());
    }

    #[test]
    fn test_step_response_endpoints() {
        for config in [
            SpringConfig::springy(),
            SpringConfig::critically_damped(150.0, 1.0),
            SpringConfig::glide(),
        ] {
            assert_eq!(config.progress_at(0.0), 0.0);
            let settle = config.settle_time_ms();
            assert!(settle > 0 && settle < MAX_SETTLE_MS);
            let end = config.progress_at(settle as f32);
            assert!((end - 1.0).abs() < 2e-3, "{:?} ended at {}", config, end);
        }
    }

    #[test]
    fn test_critical_response_never_overshoots() {
        let config = SpringConfig::critically_damped(150.0, 1.0);
        for ms in (0..2000).step_by(5) {
            assert!(config.progress_at(ms as f32) <= 1.0 + 1e-6);
        }
    }

    #[test]
    fn test_underdamped_response_overshoots() {
        let config = SpringConfig::springy();
        let peak = (0..1000)
            .map(|ms| config.progress_at(ms as f32))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_analytic_matches_integration() {
        let config = SpringConfig::critically_damped(150.0, 1.0);
        let mut spring = Spring::new(config, 0.0);
        spring.set_target(1.0);
        for _ in 0..30 {
            spring.step(1.0 / 120.0);
        }
        let analytic = config.progress_at(250.0);
        assert!((spring.value() - analytic).abs() < 1e-2);
    }

    #[test]
    fn test_spring_rk4_stability() {
        let mut spring = Spring::new(SpringConfig::stiff(), 0.0);
        spring.set_target(1000.0);

        for _ in 0..100 {
            spring.step(0.1);
            assert!(spring.value() < 2000.0);
            assert!(spring.value() > -500.0);
        }
    }

    #[test]
    fn test_degenerate_config_is_safe() {
        let config = SpringConfig::new(0.0, 0.0, 1.0);
        assert_eq!(config.settle_time_ms(), 0);
        assert_eq!(config.progress_at(100.0), 1.0);
    }
}
