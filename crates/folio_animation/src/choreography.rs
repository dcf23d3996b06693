//! Choreography templates
//!
//! Every animated element on the page gets its descriptor from one of three
//! builders:
//!
//! - [`build_entrance`]: one-time reveal from a hidden state, delayed by the
//!   element's sibling index
//! - [`build_ambient`]: endless decorative loop with a seeded phase offset
//! - [`build_interaction_feedback`]: hover, tap and magnetic responses
//!
//! Entrances are pure functions of `(direction, index)`. Only ambient loops
//! derive anything from a seed, and even that is a deterministic hash.

use serde::{Deserialize, Serialize};

use crate::descriptor::{AnimationDescriptor, Property, PropertyTiming, Repeat, Timing, VisualState};
use crate::easing::Easing;
use crate::magnetic::MagneticConfig;
use crate::spring::SpringConfig;
use crate::stagger::StaggerConfig;

// ============================================================================
// Entrances
// ============================================================================

/// Entrance reveal template
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Entrance {
    /// Slide in from the left with a slight swing
    Left,
    /// Slide in from the right with a slight swing
    Right,
    /// Fade up with a soft blur
    Up,
    /// Scale up from half size with overshoot
    Pop,
    /// Card flip in depth. Odd indices flip in from the right.
    Flip,
    /// Drop in tilted back with overshoot
    Bounce,
    /// Rise and untilt, for timeline items
    Rise,
    /// Small scale-up for tags
    Chip,
    /// Short slide from the left, for list items
    Slide,
}

impl Entrance {
    /// Pick `Left` for even indices and `Right` for odd ones
    pub fn alternating(index: usize) -> Self {
        if index % 2 == 0 {
            Entrance::Left
        } else {
            Entrance::Right
        }
    }

    /// Default sibling stagger for this template
    pub fn default_stagger(&self) -> StaggerConfig {
        match self {
            Entrance::Left | Entrance::Right => StaggerConfig::new(0, 100),
            Entrance::Up => StaggerConfig::new(0, 100),
            Entrance::Pop => StaggerConfig::new(0, 150),
            Entrance::Flip => StaggerConfig::new(0, 200),
            Entrance::Bounce => StaggerConfig::new(400, 120),
            Entrance::Rise => StaggerConfig::new(0, 100),
            Entrance::Chip => StaggerConfig::new(400, 40),
            Entrance::Slide => StaggerConfig::new(500, 80),
        }
    }
}

/// Build an entrance descriptor with the template's own stagger.
///
/// `delay = base_delay + index * stagger_step`.
pub fn build_entrance(direction: Entrance, index: usize) -> AnimationDescriptor {
    build_entrance_staggered(direction, index, &direction.default_stagger())
}

/// Build an entrance descriptor with an explicit stagger schedule
pub fn build_entrance_staggered(
    direction: Entrance,
    index: usize,
    stagger: &StaggerConfig,
) -> AnimationDescriptor {
    entrance_template(direction, index)
        .delay(stagger.delay_for(index))
        .stagger_step(stagger.step_ms)
}

fn entrance_template(direction: Entrance, index: usize) -> AnimationDescriptor {
    let hidden = VisualState::SETTLED.with_opacity(0.0);
    let settled = VisualState::SETTLED;

    match direction {
        Entrance::Left | Entrance::Right => {
            let side = if direction == Entrance::Left { -1.0 } else { 1.0 };
            AnimationDescriptor::new(
                hidden
                    .with_translation(120.0 * side, 0.0)
                    .with_rotation(0.0, 20.0 * side, 0.0)
                    .with_scale(0.85)
                    .with_blur(10.0),
                settled,
                Timing::Eased(Easing::EXPO_OUT),
                1000,
            )
            .with_override(
                PropertyTiming::new(Property::Opacity, Timing::Eased(Easing::EaseOut)).duration(700),
            )
            .with_override(PropertyTiming::new(
                Property::Translation,
                Timing::Spring(SpringConfig::glide()),
            ))
            .with_override(
                PropertyTiming::new(Property::Scale, Timing::Eased(Easing::EXPO_OUT)).duration(800),
            )
            .with_override(
                PropertyTiming::new(Property::Blur, Timing::Eased(Easing::EaseOut)).duration(700),
            )
        }
        Entrance::Up => AnimationDescriptor::new(
            hidden.with_translation(0.0, 20.0).with_blur(4.0),
            settled,
            Timing::Eased(Easing::SOFT_OUT),
            600,
        ),
        Entrance::Pop => AnimationDescriptor::new(
            hidden
                .with_scale(0.5)
                .with_rotation(0.0, 0.0, -10.0)
                .with_blur(10.0),
            settled,
            Timing::Eased(Easing::BACK_OUT),
            900,
        ),
        Entrance::Flip => {
            let side = if index % 2 == 0 { -1.0 } else { 1.0 };
            AnimationDescriptor::new(
                hidden
                    .with_rotation(0.0, 90.0 * side, 0.0)
                    .with_translation(100.0 * side, 0.0)
                    .with_scale(0.8)
                    .with_blur(10.0),
                settled,
                Timing::Eased(Easing::SOFT_OUT),
                1200,
            )
            .with_override(
                PropertyTiming::new(Property::Rotation, Timing::Eased(Easing::SOFT_OUT))
                    .duration(1000),
            )
            .with_override(
                PropertyTiming::new(Property::Blur, Timing::Eased(Easing::EaseOut)).duration(800),
            )
        }
        Entrance::Bounce => AnimationDescriptor::new(
            hidden
                .with_translation(0.0, 40.0)
                .with_scale(0.8)
                .with_rotation(45.0, 0.0, 0.0)
                .with_blur(6.0),
            settled,
            Timing::Eased(Easing::BACK_OUT),
            700,
        ),
        Entrance::Rise => AnimationDescriptor::new(
            hidden
                .with_translation(-20.0, 40.0)
                .with_rotation(-15.0, 0.0, 0.0)
                .with_scale(0.9)
                .with_blur(8.0),
            settled,
            Timing::Eased(Easing::QUINT_OUT),
            900,
        ),
        Entrance::Chip => AnimationDescriptor::new(
            hidden.with_scale(0.7).with_translation(0.0, 10.0),
            settled,
            Timing::Eased(Easing::EXPO_OUT),
            500,
        ),
        Entrance::Slide => AnimationDescriptor::new(
            hidden.with_translation(-20.0, 0.0).with_blur(4.0),
            settled,
            Timing::Eased(Easing::EXPO_OUT),
            600,
        ),
    }
}

// ============================================================================
// Ambient Motion
// ============================================================================

/// Ambient loop flavour
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmbientStyle {
    /// Large soft orb drifting diagonally while breathing
    #[default]
    Orb,
    /// Small particle floating upward and fading
    Particle,
    /// In-place breathing scale
    Pulse,
    /// Slow linear drift with rotation for background blobs
    Drift,
}

/// Build an orb-style ambient loop seeded by the element's index
pub fn build_ambient(seed: u64) -> AnimationDescriptor {
    build_ambient_styled(AmbientStyle::Orb, seed)
}

/// Build an ambient loop of the given style.
///
/// The loop never terminates and plays mirrored, so it oscillates between
/// its two states. `seed` picks the amplitude variant and a phase offset so
/// that neighbouring elements do not move in lockstep.
pub fn build_ambient_styled(style: AmbientStyle, seed: u64) -> AnimationDescriptor {
    let hash = splitmix64(seed);
    let variant = (seed % 4) as f32;

    let (initial, target, easing, half_cycle_ms) = match style {
        AmbientStyle::Orb => {
            let amplitude = 30.0 + variant * 10.0;
            (
                VisualState::SETTLED.with_opacity(0.3),
                VisualState::SETTLED
                    .with_opacity(0.6)
                    .with_translation(amplitude, -amplitude)
                    .with_scale(1.1),
                Easing::EaseInOut,
                (15_000 + 2_000 * (seed % 4) as u32) / 2,
            )
        }
        AmbientStyle::Particle => (
            VisualState::SETTLED.with_opacity(0.2),
            VisualState::SETTLED
                .with_opacity(0.8)
                .with_translation(0.0, -30.0),
            Easing::EaseInOut,
            1_500 + (hash % 1_000) as u32,
        ),
        AmbientStyle::Pulse => (
            VisualState::SETTLED,
            VisualState::SETTLED.with_scale(1.1),
            Easing::EaseInOut,
            2_000,
        ),
        AmbientStyle::Drift => {
            let distance = 50.0 + variant * 10.0;
            (
                VisualState::SETTLED,
                VisualState::SETTLED
                    .with_translation(distance, distance * 0.6)
                    .with_rotation(0.0, 0.0, 180.0),
                Easing::Linear,
                10_000 + 2_500 * (seed % 2) as u32,
            )
        }
    };

    let phase = (hash % (2 * half_cycle_ms as u64)) as u32;
    AnimationDescriptor::new(initial, target, Timing::Eased(easing), half_cycle_ms)
        .repeat(Repeat::Loop { mirror: true })
        .phase(phase)
}

/// SplitMix64 finaliser. Deterministic and well mixed for small seeds.
fn splitmix64(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

// ============================================================================
// Interaction Feedback
// ============================================================================

/// Transient response to pointer interaction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interaction {
    /// Lift on hover
    HoverLift,
    /// Grow slightly on hover
    HoverScale,
    /// Shrink while pressed
    TapCompress,
    /// Tilt and shift toward the pointer
    MagneticFollow,
}

/// Build the descriptor for an interaction.
///
/// `initial` is the resting state and `final_state` the fully engaged one.
/// The view layer plays it forward on engage and backward on release.
pub fn build_interaction_feedback(kind: Interaction) -> AnimationDescriptor {
    let rest = VisualState::SETTLED;
    match kind {
        Interaction::HoverLift => AnimationDescriptor::new(
            rest,
            rest.with_translation(0.0, -8.0),
            Timing::Eased(Easing::EaseOut),
            400,
        ),
        Interaction::HoverScale => AnimationDescriptor::new(
            rest,
            rest.with_scale(1.05).with_translation(0.0, -3.0),
            Timing::Spring(SpringConfig::springy()),
            0,
        ),
        Interaction::TapCompress => AnimationDescriptor::new(
            rest,
            rest.with_scale(0.95),
            Timing::Spring(SpringConfig::springy()),
            0,
        ),
        Interaction::MagneticFollow => build_magnetic_feedback(&MagneticConfig::default()),
    }
}

/// Magnetic-follow descriptor for a specific configuration.
///
/// The final state is the bound of the effect: the largest tilt and shift
/// the runtime will ever produce. The runtime itself is
/// [`MagneticFollow`](crate::magnetic::MagneticFollow).
pub fn build_magnetic_feedback(config: &MagneticConfig) -> AnimationDescriptor {
    let max_tilt = config.max_tilt_deg;
    let max_shift = config.max_shift_px;
    AnimationDescriptor::new(
        VisualState::SETTLED,
        VisualState::SETTLED
            .with_rotation(max_tilt, max_tilt, 0.0)
            .with_translation(max_shift, max_shift),
        Timing::Spring(config.spring()),
        0,
    )
}
