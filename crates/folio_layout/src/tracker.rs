//! Interaction tracking
//!
//! One [`InteractionTracker`] per pointer region. It keeps only the latest
//! pointer sample: every move overwrites it, leaving resets it to zero, and
//! subscribers hear about both.

use folio_core::{finite_or_zero, trim_float, Color, Point, Rect, SubscriptionId, ValueCell, Vec2};
use serde::{Deserialize, Serialize};

/// Latest pointer position inside a region
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    /// Offset from the region's top-left corner in pixels
    pub offset: Point,
    /// Offset from the region's centre as a fraction of its size.
    /// Inside the region both axes lie in [-0.5, 0.5].
    pub normalized: Vec2,
}

impl PointerSample {
    pub const ZERO: PointerSample = PointerSample {
        offset: Point::ZERO,
        normalized: Vec2::ZERO,
    };

    /// Derive a sample from a pointer position and the region's bounds.
    ///
    /// Zero-sized bounds or non-finite input give a zero normalized offset
    /// instead of NaN or infinity.
    pub fn from_pointer(point: Point, bounds: &Rect) -> Self {
        let offset = Point::new(
            finite_or_zero(point.x - bounds.x()),
            finite_or_zero(point.y - bounds.y()),
        );
        let normalized = if bounds.size().is_degenerate() {
            Vec2::ZERO
        } else {
            let center = bounds.center();
            Vec2::new(
                (point.x - center.x) / bounds.width(),
                (point.y - center.y) / bounds.height(),
            )
            .finite_or_zero()
        };
        Self { offset, normalized }
    }
}

/// Pointer tracker for a single region
#[derive(Clone, Debug)]
pub struct InteractionTracker {
    region: String,
    sample: ValueCell<PointerSample>,
}

impl InteractionTracker {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            sample: ValueCell::with_neutral(PointerSample::ZERO, PointerSample::ZERO),
        }
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn sample(&self) -> PointerSample {
        self.sample.get()
    }

    /// Overwrite the sample with a new pointer position
    pub fn pointer_move(&self, point: Point, bounds: &Rect) {
        self.sample.set(PointerSample::from_pointer(point, bounds));
    }

    /// Pointer left the region: back to exactly zero
    pub fn pointer_leave(&self) {
        self.sample.reset();
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&PointerSample) + 'static,
    {
        self.sample.subscribe(callback)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.sample.unsubscribe(id)
    }
}

// ============================================================================
// Spotlight
// ============================================================================

/// Cursor-following radial gradient drawn behind a section
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpotlightStyle {
    pub radius_px: f32,
    pub color: Color,
    /// Where the gradient reaches full transparency, in percent
    pub fade_pct: f32,
}

impl SpotlightStyle {
    /// Wide, faint blue glow behind the About section
    pub const ABOUT: SpotlightStyle = SpotlightStyle {
        radius_px: 800.0,
        color: Color::rgba(59.0 / 255.0, 130.0 / 255.0, 246.0 / 255.0, 0.08),
        fade_pct: 60.0,
    };

    /// Tighter, softer glow behind the Contact section
    pub const CONTACT: SpotlightStyle = SpotlightStyle {
        radius_px: 600.0,
        color: Color::rgba(59.0 / 255.0, 130.0 / 255.0, 246.0 / 255.0, 0.06),
        fade_pct: 80.0,
    };

    /// CSS background for a pointer sample
    pub fn gradient(&self, sample: &PointerSample) -> String {
        format!(
            "radial-gradient({}px circle at {}px {}px, {}, transparent {}%)",
            trim_float(self.radius_px),
            trim_float(sample.offset.x),
            trim_float(sample.offset.y),
            self.color.to_css(),
            trim_float(self.fade_pct),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_sample_offsets() {
        let bounds = Rect::new(100.0, 50.0, 200.0, 100.0);
        let sample = PointerSample::from_pointer(Point::new(250.0, 75.0), &bounds);
        assert_eq!(sample.offset, Point::new(150.0, 25.0));
        assert!((sample.normalized.x - 0.25).abs() < 1e-6);
        assert!((sample.normalized.y + 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_zero_sized_bounds() {
        let bounds = Rect::new(10.0, 10.0, 0.0, 0.0);
        let sample = PointerSample::from_pointer(Point::new(12.0, 12.0), &bounds);
        assert_eq!(sample.normalized, Vec2::ZERO);

        let sample = PointerSample::from_pointer(Point::new(f32::NAN, 1.0), &Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(sample.offset.x, 0.0);
        assert_eq!(sample.normalized.x, 0.0);
    }

    #[test]
    fn test_leave_resets_exactly() {
        let tracker = InteractionTracker::new("card");
        let bounds = Rect::new(0.0, 0.0, 300.0, 200.0);
        tracker.pointer_move(Point::new(290.0, 5.0), &bounds);
        tracker.pointer_move(Point::new(1000.0, -400.0), &bounds);
        assert_ne!(tracker.sample(), PointerSample::ZERO);

        tracker.pointer_leave();
        let sample = tracker.sample();
        assert_eq!(sample.normalized, Vec2::new(0.0, 0.0));
        assert_eq!(sample.offset, Point::new(0.0, 0.0));
    }

    #[test]
    fn test_subscribers_see_every_write() {
        let tracker = InteractionTracker::new("about");
        let writes = Rc::new(Cell::new(0));
        let seen = writes.clone();
        let id = tracker.subscribe(move |_| seen.set(seen.get() + 1));

        let bounds = Rect::new(0.0, 0.0, 10.0, 10.0);
        tracker.pointer_move(Point::new(1.0, 1.0), &bounds);
        tracker.pointer_move(Point::new(1.0, 1.0), &bounds);
        tracker.pointer_leave();
        assert_eq!(writes.get(), 3);

        assert!(tracker.unsubscribe(id));
        tracker.pointer_leave();
        assert_eq!(writes.get(), 3);
    }

    #[test]
    fn test_spotlight_gradient() {
        let sample = PointerSample {
            offset: Point::new(120.0, 48.5),
            normalized: Vec2::ZERO,
        };
        assert_eq!(
            SpotlightStyle::ABOUT.gradient(&sample),
            "radial-gradient(800px circle at 120px 48.5px, rgba(59,130,246,0.08), transparent 60%)"
        );
        assert_eq!(
            SpotlightStyle::CONTACT.gradient(&PointerSample::ZERO),
            "radial-gradient(600px circle at 0px 0px, rgba(59,130,246,0.06), transparent 80%)"
        );
    }
}
