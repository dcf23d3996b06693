//! Viewport-triggered, fire-once entrances

use serde::{Deserialize, Serialize};

/// Fires the first time an element's visible fraction reaches `amount`.
///
/// The trigger disarms itself after firing and there is no way to re-arm
/// it, so scrolling an element out of view and back never replays its
/// entrance.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportTrigger {
    amount: f32,
    fired: bool,
}

impl ViewportTrigger {
    /// `amount` is the visible fraction in [0, 1] required to fire.
    /// 0 fires as soon as any part of the element is visible.
    pub fn new(amount: f32) -> Self {
        let amount = if amount.is_finite() {
            amount.clamp(0.0, 1.0)
        } else {
            0.0
        };
        Self {
            amount,
            fired: false,
        }
    }

    pub fn amount(&self) -> f32 {
        self.amount
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Report the element's current visible fraction.
    ///
    /// Returns true exactly once, on the observation that first satisfies
    /// the threshold.
    pub fn observe(&mut self, visible_fraction: f32) -> bool {
        if self.fired {
            return false;
        }
        let fraction = if visible_fraction.is_finite() {
            visible_fraction.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let satisfied = if self.amount == 0.0 {
            fraction > 0.0
        } else {
            fraction >= self.amount
        };
        if satisfied {
            self.fired = true;
        }
        satisfied
    }
}

impl Default for ViewportTrigger {
    fn default() -> Self {
        Self::new(0.0)
    }
}
