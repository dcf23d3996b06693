//! Animatable value types
//!
//! Linear interpolation for the scalar and vector components of a visual
//! state. Progress values outside [0, 1] are allowed so overshooting curves
//! and underdamped springs extrapolate past the target.

use folio_core::{Vec2, Vec3};

/// Trait for values that can be linearly interpolated
pub trait Interpolate: Clone {
    /// Linearly interpolate between self and other by factor t
    fn lerp(&self, other: &Self, t: f32) -> Self;

    /// Check if two values are approximately equal (for settling detection)
    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool;
}

// ============================================================================
// f32 Implementation
// ============================================================================

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        (self - other).abs() < epsilon
    }
}

// ============================================================================
// Vector Implementations
// ============================================================================

impl Interpolate for Vec2 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Vec2::new(self.x.lerp(&other.x, t), self.y.lerp(&other.y, t))
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.x.approx_eq(&other.x, epsilon) && self.y.approx_eq(&other.y, epsilon)
    }
}

impl Interpolate for Vec3 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        Vec3::new(
            self.x.lerp(&other.x, t),
            self.y.lerp(&other.y, t),
            self.z.lerp(&other.z, t),
        )
    }

    fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.x.approx_eq(&other.x, epsilon)
            && self.y.approx_eq(&other.y, epsilon)
            && self.z.approx_eq(&other.z, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_extrapolates() {
        assert_eq!(0.0f32.lerp(&10.0, 1.2), 12.0);
        assert_eq!(Vec2::new(0.0, 0.0).lerp(&Vec2::new(10.0, -10.0), 0.5), Vec2::new(5.0, -5.0));
    }

    #[test]
    fn test_vec3_approx_eq() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(1.0005, 2.0, 3.0);
        assert!(a.approx_eq(&b, 0.001));
        assert!(!a.approx_eq(&b, 0.0001));
    }
}
