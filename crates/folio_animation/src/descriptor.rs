//! Animation descriptors
//!
//! An [`AnimationDescriptor`] is an immutable description of one element's
//! motion: where it starts, where it settles, and how it gets there. Sampling
//! is a pure function of elapsed time, so two samples at the same time are
//! always equal and no per-frame state lives in the descriptor itself.
//!
//! Descriptors only describe visual offsets (opacity, transform and blur).
//! Layout is never animated, so the space an element reserves is the same
//! in every visual state.

use folio_core::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::easing::Easing;
use crate::spring::SpringConfig;
use crate::values::Interpolate;

// ============================================================================
// Visual State
// ============================================================================

/// The animatable visual properties of an element
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisualState {
    /// 0.0 transparent to 1.0 opaque
    pub opacity: f32,
    /// Offset from the laid-out position in pixels
    pub translation: Vec2,
    /// Uniform scale, 1.0 is natural size
    pub scale: f32,
    /// Rotation around the x, y and z axes in degrees
    pub rotation: Vec3,
    /// Gaussian blur radius in pixels
    pub blur: f32,
}

impl VisualState {
    /// Fully visible at its laid-out position
    pub const SETTLED: VisualState = VisualState {
        opacity: 1.0,
        translation: Vec2::ZERO,
        scale: 1.0,
        rotation: Vec3::ZERO,
        blur: 0.0,
    };

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_translation(mut self, x: f32, y: f32) -> Self {
        self.translation = Vec2::new(x, y);
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_rotation(mut self, x: f32, y: f32, z: f32) -> Self {
        self.rotation = Vec3::new(x, y, z);
        self
    }

    pub fn with_blur(mut self, blur: f32) -> Self {
        self.blur = blur;
        self
    }

    /// Replace every non-finite component with the matching one from `fallback`
    pub fn sanitized(self, fallback: &VisualState) -> Self {
        let pick = |v: f32, f: f32| if v.is_finite() { v } else { f };
        VisualState {
            opacity: pick(self.opacity, fallback.opacity),
            translation: Vec2::new(
                pick(self.translation.x, fallback.translation.x),
                pick(self.translation.y, fallback.translation.y),
            ),
            scale: pick(self.scale, fallback.scale),
            rotation: Vec3::new(
                pick(self.rotation.x, fallback.rotation.x),
                pick(self.rotation.y, fallback.rotation.y),
                pick(self.rotation.z, fallback.rotation.z),
            ),
            blur: pick(self.blur, fallback.blur),
        }
    }

    /// Interpolate a single property, leaving the others untouched
    fn blend_property(&mut self, from: &Self, to: &Self, property: Property, t: f32) {
        match property {
            Property::Opacity => self.opacity = from.opacity.lerp(&to.opacity, t),
            Property::Translation => self.translation = from.translation.lerp(&to.translation, t),
            Property::Scale => self.scale = from.scale.lerp(&to.scale, t),
            Property::Rotation => self.rotation = from.rotation.lerp(&to.rotation, t),
            Property::Blur => self.blur = from.blur.lerp(&to.blur, t),
        }
    }
}

impl Default for VisualState {
    fn default() -> Self {
        Self::SETTLED
    }
}

impl Interpolate for VisualState {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        let mut out = *self;
        for property in Property::ALL {
            out.blend_property(self, other, property, t);
        }
        out
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.opacity.approx_eq(&other.opacity, epsilon)
            && self.translation.approx_eq(&other.translation, epsilon)
            && self.scale.approx_eq(&other.scale, epsilon)
            && self.rotation.approx_eq(&other.rotation, epsilon)
            && self.blur.approx_eq(&other.blur, epsilon)
    }
}

/// One independently timed channel of a [`VisualState`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    Opacity,
    Translation,
    Scale,
    Rotation,
    Blur,
}

impl Property {
    pub const ALL: [Property; 5] = [
        Property::Opacity,
        Property::Translation,
        Property::Scale,
        Property::Rotation,
        Property::Blur,
    ];
}

// ============================================================================
// Timing
// ============================================================================

/// How progress advances over time
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timing {
    /// Fixed duration shaped by an easing curve
    Eased(Easing),
    /// Physical spring released from rest; duration is its settle time
    Spring(SpringConfig),
}

impl Timing {
    /// Progress at `local_ms` into a run lasting `duration_ms`
    fn progress(&self, local_ms: f32, duration_ms: u32) -> f32 {
        match self {
            Timing::Eased(easing) => {
                if duration_ms == 0 {
                    1.0
                } else {
                    easing.apply(local_ms / duration_ms as f32)
                }
            }
            Timing::Spring(config) => {
                if local_ms >= config.settle_time_ms() as f32 {
                    1.0
                } else {
                    config.progress_at(local_ms)
                }
            }
        }
    }

    /// Wall time a single run takes
    fn run_length(&self, duration_ms: u32) -> u32 {
        match self {
            Timing::Eased(_) => duration_ms,
            Timing::Spring(config) => config.settle_time_ms(),
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Timing::Eased(Easing::default())
    }
}

/// Timing for one property that differs from the descriptor default
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertyTiming {
    pub property: Property,
    pub timing: Timing,
    /// Replaces the descriptor duration when set
    pub duration_ms: Option<u32>,
    /// Added on top of the descriptor delay
    pub extra_delay_ms: u32,
}

impl PropertyTiming {
    pub fn new(property: Property, timing: Timing) -> Self {
        Self {
            property,
            timing,
            duration_ms: None,
            extra_delay_ms: 0,
        }
    }

    pub fn duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

/// Repeat behaviour
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Repeat {
    /// Play once and hold the final state
    #[default]
    None,
    /// Play forever. `mirror` plays every other cycle backwards.
    Loop { mirror: bool },
}

// ============================================================================
// Descriptor
// ============================================================================

/// Immutable description of an element's motion
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationDescriptor {
    /// Visual state before the animation starts (the "hidden" state for entrances)
    pub initial: VisualState,
    /// Visual state once settled
    pub final_state: VisualState,
    /// Default timing for every property
    pub timing: Timing,
    /// Length of one eased run
    pub duration_ms: u32,
    /// Delay from playback start to motion start
    pub delay_ms: u32,
    /// Per-sibling step this descriptor's delay was composed with
    pub stagger_step_ms: u32,
    pub repeat: Repeat,
    /// Offset into the loop at motion start, used to desynchronise ambient loops
    pub phase_ms: u32,
    /// Properties with their own timing
    #[serde(default, skip_serializing_if = "SmallVec::is_empty")]
    pub overrides: SmallVec<[PropertyTiming; 4]>,
}

impl AnimationDescriptor {
    /// A one-shot eased transition between two states
    pub fn new(initial: VisualState, final_state: VisualState, timing: Timing, duration_ms: u32) -> Self {
        Self {
            initial,
            final_state,
            timing,
            duration_ms,
            delay_ms: 0,
            stagger_step_ms: 0,
            repeat: Repeat::None,
            phase_ms: 0,
            overrides: SmallVec::new(),
        }
    }

    pub fn delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn stagger_step(mut self, step_ms: u32) -> Self {
        self.stagger_step_ms = step_ms;
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn phase(mut self, phase_ms: u32) -> Self {
        self.phase_ms = phase_ms;
        self
    }

    /// Give one property its own timing. A later override for the same
    /// property replaces an earlier one.
    pub fn with_override(mut self, timing: PropertyTiming) -> Self {
        self.overrides.retain(|o| o.property != timing.property);
        self.overrides.push(timing);
        self
    }

    pub fn is_looping(&self) -> bool {
        matches!(self.repeat, Repeat::Loop { .. })
    }

    /// Wall time from playback start until every property has settled.
    ///
    /// `None` for loops, which never settle.
    pub fn total_duration_ms(&self) -> Option<u32> {
        if self.is_looping() {
            return None;
        }
        let longest = Property::ALL
            .iter()
            .map(|&property| {
                let (timing, duration, extra) = self.timing_for(property);
                extra.saturating_add(timing.run_length(duration))
            })
            .max()
            .unwrap_or(0);
        Some(self.delay_ms.saturating_add(longest))
    }

    /// True once a one-shot descriptor has reached its final state
    pub fn is_settled_at(&self, elapsed_ms: f32) -> bool {
        match self.total_duration_ms() {
            Some(total) => elapsed_ms >= total as f32,
            None => false,
        }
    }

    /// Fold the elapsed time of a loop back into its first repeating
    /// period. Sampling the folded time gives the same state, and the clock
    /// of an endless loop stays small enough to keep full `f32` precision.
    ///
    /// One-shot descriptors are returned unchanged.
    pub fn wrap_elapsed(&self, elapsed_ms: f32) -> f32 {
        let Repeat::Loop { mirror } = self.repeat else {
            return elapsed_ms;
        };
        let mut lead_in = self.delay_ms as f32;
        let mut period: u64 = 1;
        for &property in Property::ALL.iter() {
            let (timing, duration, extra) = self.timing_for(property);
            lead_in = lead_in.max(self.delay_ms as f32 + extra as f32);
            let cycle = u64::from(timing.run_length(duration).max(1)) * if mirror { 2 } else { 1 };
            period = lcm(period, cycle);
        }
        let period = period as f32;
        if elapsed_ms < lead_in + period {
            elapsed_ms
        } else {
            lead_in + (elapsed_ms - lead_in) % period
        }
    }

    /// Visual state `elapsed_ms` after playback start.
    ///
    /// Before the delay elapses this is the initial state. Non-finite results
    /// fall back to the final state, so a bad input can never reach a
    /// transform.
    pub fn sample(&self, elapsed_ms: f32) -> VisualState {
        let elapsed_ms = if elapsed_ms.is_finite() {
            elapsed_ms.max(0.0)
        } else {
            0.0
        };

        let mut out = self.initial;
        for property in Property::ALL {
            let (timing, duration, extra) = self.timing_for(property);
            let local = elapsed_ms - self.delay_ms as f32 - extra as f32;
            if local <= 0.0 && !self.is_looping() {
                continue;
            }
            let t = self.progress(timing, duration, local.max(0.0));
            out.blend_property(&self.initial, &self.final_state, property, t);
        }
        out.sanitized(&self.final_state)
    }

    fn progress(&self, timing: Timing, duration_ms: u32, local_ms: f32) -> f32 {
        match self.repeat {
            Repeat::None => timing.progress(local_ms, duration_ms),
            Repeat::Loop { mirror } => {
                let cycle = timing.run_length(duration_ms).max(1) as f32;
                let position = local_ms + self.phase_ms as f32;
                let index = (position / cycle).floor();
                let mut fraction = (position - index * cycle) / cycle;
                if mirror && (index as u64) % 2 == 1 {
                    fraction = 1.0 - fraction;
                }
                timing.progress(fraction * cycle, cycle as u32)
            }
        }
    }

    fn timing_for(&self, property: Property) -> (Timing, u32, u32) {
        match self.overrides.iter().find(|o| o.property == property) {
            Some(o) => (
                o.timing,
                o.duration_ms.unwrap_or(self.duration_ms),
                o.extra_delay_ms,
            ),
            None => (self.timing, self.duration_ms, 0),
        }
    }
}

fn lcm(a: u64, b: u64) -> u64 {
    fn gcd(mut a: u64, mut b: u64) -> u64 {
        while b != 0 {
            (a, b) = (b, a % b);
        }
        a
    }
    a / gcd(a, b) * b
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fade_up() -> AnimationDescriptor {
        AnimationDescriptor::new(
            VisualState::SETTLED.with_opacity(0.0).with_translation(0.0, 20.0),
            VisualState::SETTLED,
            Timing::Eased(Easing::Linear),
            1000,
        )
        .delay(200)
    }

    #[test]
    fn test_sample_before_delay_is_initial() {
        let d = fade_up();
        assert_eq!(d.sample(0.0), d.initial);
        assert_eq!(d.sample(199.0), d.initial);
    }

    #[test]
    fn test_sample_midway_and_end() {
        let d = fade_up();
        let mid = d.sample(700.0);
        assert!((mid.opacity - 0.5).abs() < 1e-4);
        assert!((mid.translation.y - 10.0).abs() < 1e-3);
        assert_eq!(d.sample(1200.0), VisualState::SETTLED);
        assert_eq!(d.sample(5000.0), VisualState::SETTLED);
    }

    #[test]
    fn test_total_duration_includes_overrides() {
        let d = fade_up().with_override(
            PropertyTiming::new(Property::Opacity, Timing::Eased(Easing::Linear)).duration(1500),
        );
        assert_eq!(d.total_duration_ms(), Some(1700));
        assert!(!d.is_settled_at(1600.0));
        assert!(d.is_settled_at(1700.0));
    }

    #[test]
    fn test_override_runs_on_its_own_clock() {
        let d = fade_up().with_override(
            PropertyTiming::new(Property::Opacity, Timing::Eased(Easing::Linear)).duration(500),
        );
        let s = d.sample(700.0);
        assert_eq!(s.opacity, 1.0);
        assert!((s.translation.y - 10.0).abs() < 1e-3);
    }

    #[test]
    fn test_spring_override_settles() {
        let spring = SpringConfig::glide();
        let d = fade_up().with_override(PropertyTiming::new(
            Property::Translation,
            Timing::Spring(spring),
        ));
        let total = d.total_duration_ms().unwrap_or(0);
        assert_eq!(total, 200 + spring.settle_time_ms().max(1000));
        assert_eq!(d.sample(total as f32).translation, Vec2::ZERO);
    }

    #[test]
    fn test_mirrored_loop() {
        let d = AnimationDescriptor::new(
            VisualState::SETTLED,
            VisualState::SETTLED.with_scale(2.0),
            Timing::Eased(Easing::Linear),
            1000,
        )
        .repeat(Repeat::Loop { mirror: true });

        assert_eq!(d.total_duration_ms(), None);
        assert!((d.sample(500.0).scale - 1.5).abs() < 1e-4);
        assert!((d.sample(1250.0).scale - 1.75).abs() < 1e-4);
        assert!((d.sample(2250.0).scale - 1.25).abs() < 1e-4);
        assert!(!d.is_settled_at(1.0e9));
    }

    #[test]
    fn test_wrapped_loop_samples_the_same() {
        let d = AnimationDescriptor::new(
            VisualState::SETTLED,
            VisualState::SETTLED.with_scale(2.0),
            Timing::Eased(Easing::Linear),
            1000,
        )
        .delay(100)
        .repeat(Repeat::Loop { mirror: true })
        .with_override(
            PropertyTiming::new(Property::Opacity, Timing::Eased(Easing::Linear)).duration(750),
        );

        // mirrored cycles of 2000ms and 1500ms repeat together every 6000ms
        assert_eq!(d.wrap_elapsed(6_099.0), 6_099.0);
        assert_eq!(d.wrap_elapsed(6_100.0), 100.0);
        assert_eq!(d.wrap_elapsed(12_350.0), 350.0);
        for elapsed in [6_350.0, 7_900.0, 11_000.0] {
            let wrapped = d.wrap_elapsed(elapsed);
            assert!(wrapped < 6_100.0);
            assert!((d.sample(wrapped).scale - d.sample(elapsed).scale).abs() < 1e-4);
            assert!((d.sample(wrapped).opacity - d.sample(elapsed).opacity).abs() < 1e-4);
        }
        assert_eq!(fade_up().wrap_elapsed(1.0e9), 1.0e9);
    }

    #[test]
    fn test_phase_shifts_loop() {
        let base = AnimationDescriptor::new(
            VisualState::SETTLED,
            VisualState::SETTLED.with_scale(2.0),
            Timing::Eased(Easing::Linear),
            1000,
        )
        .repeat(Repeat::Loop { mirror: false });
        let shifted = base.clone().phase(250);
        assert!((shifted.sample(0.0).scale - base.sample(250.0).scale).abs() < 1e-5);
    }

    #[test]
    fn test_non_finite_input_fails_safe() {
        let d = fade_up();
        assert_eq!(d.sample(f32::NAN), d.initial);

        let broken = AnimationDescriptor::new(
            VisualState::SETTLED.with_opacity(f32::NAN),
            VisualState::SETTLED,
            Timing::Eased(Easing::Linear),
            100,
        );
        assert_eq!(broken.sample(0.0).opacity, 1.0);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let d = AnimationDescriptor::new(
            VisualState::SETTLED.with_opacity(0.0),
            VisualState::SETTLED,
            Timing::Eased(Easing::EaseOut),
            0,
        );
        assert_eq!(d.sample(0.0).opacity, 0.0);
        assert_eq!(d.sample(1.0).opacity, 1.0);
        assert_eq!(d.total_duration_ms(), Some(0));
    }
}
