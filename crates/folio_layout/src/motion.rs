//! Motion attached to view nodes
//!
//! A node's [`MotionSpec`] is plain data: descriptors built at render time
//! plus bindings naming the pointer region that drives a continuous effect.
//! Nothing here ticks. [`RenderState`](crate::RenderState) turns specs into
//! playbacks when the tree is mounted.

use folio_animation::{
    build_interaction_feedback, AnimationDescriptor, Entrance, Interaction, MagneticConfig,
};
use serde::Serialize;
use smallvec::SmallVec;

use crate::tracker::SpotlightStyle;

/// One-time reveal for a node
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EntranceSpec {
    pub direction: Entrance,
    /// Sibling index the delay was derived from
    pub index: usize,
    /// Visible fraction that fires the reveal. `None` means the node has no
    /// trigger of its own and starts together with its nearest revealing
    /// ancestor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewport_amount: Option<f32>,
    pub descriptor: AnimationDescriptor,
}

/// Hover or tap response
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InteractionSpec {
    pub kind: Interaction,
    pub descriptor: AnimationDescriptor,
}

impl InteractionSpec {
    pub fn new(kind: Interaction) -> Self {
        Self {
            kind,
            descriptor: build_interaction_feedback(kind),
        }
    }
}

/// Pointer-driven tilt or parallax fed by a region's tracker
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MagneticBinding {
    pub region: String,
    pub config: MagneticConfig,
}

/// Cursor-following background fed by a region's tracker
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SpotlightBinding {
    pub region: String,
    pub style: SpotlightStyle,
}

/// Everything that moves on a node
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MotionSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entrance: Option<EntranceSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ambient: Option<AnimationDescriptor>,
    #[serde(skip_serializing_if = "SmallVec::is_empty")]
    pub interactions: SmallVec<[InteractionSpec; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub magnetic: Option<MagneticBinding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spotlight: Option<SpotlightBinding>,
}

impl MotionSpec {
    pub fn is_empty(&self) -> bool {
        self.entrance.is_none()
            && self.ambient.is_none()
            && self.interactions.is_empty()
            && self.magnetic.is_none()
            && self.spotlight.is_none()
    }

    /// Regions this node listens to
    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.magnetic
            .as_ref()
            .map(|m| m.region.as_str())
            .into_iter()
            .chain(self.spotlight.as_ref().map(|s| s.region.as_str()))
    }

    pub fn has_interaction(&self, kind: Interaction) -> bool {
        self.interactions.iter().any(|i| i.kind == kind)
    }
}
