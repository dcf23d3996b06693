//! Folio Choreography Engine
//!
//! Declarative animation descriptors for a single-page portfolio, plus the
//! runtime pieces that play them.
//!
//! # Features
//!
//! - **Descriptors**: immutable initial/final visual states with easing or
//!   spring timing, per-property overrides, and mirrored loops
//! - **Templates**: entrance, ambient and interaction builders with every
//!   timing value kept as a named constant
//! - **Springs**: RK4-integrated springs for live targets and a closed-form
//!   step response for deterministic sampling
//! - **Magnetic Follow**: pointer-driven tilt clamped to a maximum angle
//! - **Viewport Triggers**: fire-once entrance gating
//! - **Scheduler**: single-threaded playback ticking with parent-before-child
//!   ordering and drop-based cleanup

pub mod choreography;
pub mod descriptor;
pub mod easing;
pub mod magnetic;
pub mod scheduler;
pub mod spring;
pub mod stagger;
pub mod trigger;
pub mod values;

pub use choreography::{
    build_ambient, build_ambient_styled, build_entrance, build_entrance_staggered,
    build_interaction_feedback, build_magnetic_feedback, AmbientStyle, Entrance, Interaction,
};
pub use descriptor::{
    AnimationDescriptor, Property, PropertyTiming, Repeat, Timing, VisualState,
};
pub use easing::Easing;
pub use magnetic::{MagneticConfig, MagneticFollow, MagneticOutput};
pub use scheduler::{
    AnimatedDescriptor, AnimationScheduler, PlaybackId, PlaybackPhase, SchedulerHandle,
    StartResult,
};
pub use spring::{Spring, SpringConfig};
pub use stagger::{StaggerConfig, StaggerDirection};
pub use trigger::ViewportTrigger;
pub use values::Interpolate;
