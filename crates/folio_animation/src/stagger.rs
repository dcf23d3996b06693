//! Stagger composition for sibling reveals
//!
//! A parent container reveals its children one after another rather than
//! all at once. The child at position `i` starts
//! `delay_children_ms + i * step_ms` after its parent.

use serde::{Deserialize, Serialize};

/// Direction for stagger animations
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaggerDirection {
    /// Animate first to last
    #[default]
    Forward,
    /// Animate last to first
    Reverse,
    /// Animate from center outward
    FromCenter,
}

/// Per-sibling delay schedule
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StaggerConfig {
    /// Delay before the first child starts (ms)
    pub delay_children_ms: u32,
    /// Delay between each child's animation start (ms)
    pub step_ms: u32,
    /// Direction of stagger
    pub direction: StaggerDirection,
    /// Optional: limit stagger to first N items
    pub limit: Option<usize>,
}

impl StaggerConfig {
    /// Create a new stagger config
    pub const fn new(delay_children_ms: u32, step_ms: u32) -> Self {
        Self {
            delay_children_ms,
            step_ms,
            direction: StaggerDirection::Forward,
            limit: None,
        }
    }

    /// No delay at all
    pub const fn none() -> Self {
        Self::new(0, 0)
    }

    /// Stagger from last to first
    pub fn reverse(mut self) -> Self {
        self.direction = StaggerDirection::Reverse;
        self
    }

    /// Stagger from center outward
    pub fn from_center(mut self) -> Self {
        self.direction = StaggerDirection::FromCenter;
        self
    }

    /// Limit stagger to first N items
    pub fn limit(mut self, n: usize) -> Self {
        self.limit = Some(n);
        self
    }

    /// Delay for a child in forward order, ignoring the sibling count
    pub fn delay_for(&self, index: usize) -> u32 {
        self.delay_for_index(index, index.saturating_add(1))
    }

    /// Calculate delay for a specific child index among `total` siblings
    pub fn delay_for_index(&self, index: usize, total: usize) -> u32 {
        let effective_index = match self.direction {
            StaggerDirection::Forward => index,
            StaggerDirection::Reverse => total.saturating_sub(1).saturating_sub(index),
            StaggerDirection::FromCenter => {
                let center = total / 2;
                if index <= center {
                    center - index
                } else {
                    index - center
                }
            }
        };

        let capped_index = match self.limit {
            Some(limit) => effective_index.min(limit),
            None => effective_index,
        };

        let step = u32::try_from(capped_index)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.step_ms);
        self.delay_children_ms.saturating_add(step)
    }
}

impl Default for StaggerConfig {
    fn default() -> Self {
        Self::none()
    }
}
