//! Magnetic-follow runtime
//!
//! Turns a normalized pointer offset into a bounded tilt and shift that
//! chases the pointer through springs. The offset is measured from the
//! element's center and divided by its size, so the element's edges sit at
//! ±0.5.
//!
//! Bounds are enforced twice: targets are computed from a clamped offset,
//! and the spring output is clamped again so a spring overshoot can never
//! exceed the configured maximum either. Pointer-leave is an interrupt, not
//! a reversal: the springs snap straight back to rest.

use folio_core::{finite_or_zero, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::spring::{Spring, SpringConfig};

/// Edge of the normalized offset range
const OFFSET_LIMIT: f32 = 0.5;

/// Card tilt at the element's edge, in degrees
pub const DEFAULT_MAX_TILT_DEG: f32 = 5.0;
/// Parallax shift at the element's edge, in pixels
pub const DEFAULT_MAX_SHIFT_PX: f32 = 8.0;
/// Stiffness shared by the card tilt and timeline parallax springs
pub const DEFAULT_STIFFNESS: f32 = 150.0;

/// Magnetic-follow tuning
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MagneticConfig {
    /// Largest tilt in degrees on either axis
    pub max_tilt_deg: f32,
    /// Largest shift in pixels on either axis
    pub max_shift_px: f32,
    pub stiffness: f32,
    pub mass: f32,
    /// Explicit damping. `None` means critical damping.
    pub damping: Option<f32>,
}

impl MagneticConfig {
    /// Tilt-only follow, as used by project cards
    pub fn tilt(max_tilt_deg: f32) -> Self {
        Self {
            max_tilt_deg,
            max_shift_px: 0.0,
            ..Self::default()
        }
    }

    /// Shift-only follow, as used for timeline parallax
    pub fn parallax(max_shift_px: f32) -> Self {
        Self {
            max_tilt_deg: 0.0,
            max_shift_px,
            ..Self::default()
        }
    }

    /// The spring driving every axis
    pub fn spring(&self) -> SpringConfig {
        match self.damping {
            Some(damping) => SpringConfig::new(self.stiffness, damping, self.mass),
            None => SpringConfig::critically_damped(self.stiffness, self.mass),
        }
    }
}

impl Default for MagneticConfig {
    fn default() -> Self {
        Self {
            max_tilt_deg: DEFAULT_MAX_TILT_DEG,
            max_shift_px: DEFAULT_MAX_SHIFT_PX,
            stiffness: DEFAULT_STIFFNESS,
            mass: 1.0,
            damping: None,
        }
    }
}

/// Current magnetic transform
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MagneticOutput {
    /// Tilt in degrees. `x` follows the vertical offset, `y` the horizontal.
    pub rotation: Vec3,
    pub translation: Vec2,
}

/// Spring-driven pointer follower for one element
#[derive(Clone, Debug)]
pub struct MagneticFollow {
    config: MagneticConfig,
    tilt_x: Spring,
    tilt_y: Spring,
    shift_x: Spring,
    shift_y: Spring,
}

impl MagneticFollow {
    pub fn new(config: MagneticConfig) -> Self {
        let spring = config.spring();
        Self {
            config,
            tilt_x: Spring::new(spring, 0.0),
            tilt_y: Spring::new(spring, 0.0),
            shift_x: Spring::new(spring, 0.0),
            shift_y: Spring::new(spring, 0.0),
        }
    }

    pub fn config(&self) -> &MagneticConfig {
        &self.config
    }

    /// Aim at a new normalized pointer offset.
    ///
    /// Offsets outside ±0.5 are clamped and non-finite components count as 0.
    pub fn set_offset(&mut self, offset: Vec2) {
        let target = Self::targets_for(&self.config, offset);
        self.tilt_x.set_target(target.rotation.x);
        self.tilt_y.set_target(target.rotation.y);
        self.shift_x.set_target(target.translation.x);
        self.shift_y.set_target(target.translation.y);
    }

    /// Pointer left the element: return to rest immediately
    pub fn release(&mut self) {
        self.tilt_x.snap_to(0.0);
        self.tilt_y.snap_to(0.0);
        self.shift_x.snap_to(0.0);
        self.shift_y.snap_to(0.0);
    }

    /// Advance the springs by `dt_ms` milliseconds
    pub fn step(&mut self, dt_ms: f32) {
        let dt = finite_or_zero(dt_ms).max(0.0) / 1000.0;
        if dt == 0.0 {
            return;
        }
        for spring in [
            &mut self.tilt_x,
            &mut self.tilt_y,
            &mut self.shift_x,
            &mut self.shift_y,
        ] {
            spring.step(dt);
        }
    }

    pub fn is_settled(&self) -> bool {
        self.tilt_x.is_settled()
            && self.tilt_y.is_settled()
            && self.shift_x.is_settled()
            && self.shift_y.is_settled()
    }

    /// True when resting at zero with no target
    pub fn is_idle(&self) -> bool {
        self.is_settled()
            && self.tilt_x.target() == 0.0
            && self.tilt_y.target() == 0.0
            && self.shift_x.target() == 0.0
            && self.shift_y.target() == 0.0
    }

    /// Current bounded transform
    pub fn output(&self) -> MagneticOutput {
        let tilt = self.config.max_tilt_deg.abs();
        let shift = self.config.max_shift_px.abs();
        let bound = |v: f32, limit: f32| finite_or_zero(v).clamp(-limit, limit);
        MagneticOutput {
            rotation: Vec3::new(
                bound(self.tilt_x.value(), tilt),
                bound(self.tilt_y.value(), tilt),
                0.0,
            ),
            translation: Vec2::new(
                bound(self.shift_x.value(), shift),
                bound(self.shift_y.value(), shift),
            ),
        }
    }

    /// Where the springs head for a given offset.
    ///
    /// Moving the pointer down tilts the top edge away (negative x rotation),
    /// moving it right turns the element toward it (positive y rotation).
    pub fn targets_for(config: &MagneticConfig, offset: Vec2) -> MagneticOutput {
        let offset = offset.finite_or_zero();
        let nx = offset.x.clamp(-OFFSET_LIMIT, OFFSET_LIMIT) / OFFSET_LIMIT;
        let ny = offset.y.clamp(-OFFSET_LIMIT, OFFSET_LIMIT) / OFFSET_LIMIT;
        let tilt = config.max_tilt_deg.abs();
        let shift = config.max_shift_px.abs();
        MagneticOutput {
            rotation: Vec3::new(-ny * tilt, nx * tilt, 0.0),
            translation: Vec2::new(nx * shift, ny * shift),
        }
    }
}

impl Default for MagneticFollow {
    fn default() -> Self {
        Self::new(MagneticConfig::default())
    }
}
