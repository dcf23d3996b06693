//! RenderState - live motion for a mounted view tree
//!
//! The [`ViewTree`] is static: it says what each node *may* do. RenderState
//! holds what is happening right now:
//!
//! | Concern               | Lives in                           |
//! |-----------------------|------------------------------------|
//! | Entrance playback     | [`AnimatedDescriptor`] per node    |
//! | "Entered viewport"    | [`ViewportTrigger`] per node       |
//! | Ambient loop          | [`AnimatedDescriptor`] per node    |
//! | Pointer sample        | [`InteractionTracker`] per region  |
//! | Magnetic tilt/shift   | [`MagneticFollow`] per region      |
//!
//! Every playback is owned by its node entry, so [`RenderState::unmount`]
//! (or dropping the state) removes all of them from the scheduler.

use std::cell::RefCell;
use std::rc::Rc;

use folio_animation::{
    AnimatedDescriptor, AnimationScheduler, MagneticConfig, MagneticFollow, MagneticOutput,
    PlaybackPhase, ViewportTrigger, VisualState,
};
use folio_core::{Point, Rect, SubscriptionId, Vec2, Vec3};
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::page::RenderOptions;
use crate::tracker::{InteractionTracker, PointerSample, SpotlightStyle};
use crate::tree::{ViewNodeId, ViewTree};

/// Live motion of one node
#[derive(Default)]
struct NodeMotion {
    entrance: Option<AnimatedDescriptor>,
    /// Present only on nodes that reveal on their own visibility
    trigger: Option<ViewportTrigger>,
    ambient: Option<AnimatedDescriptor>,
    magnetic_region: Option<String>,
}

impl NodeMotion {
    fn is_empty(&self) -> bool {
        self.entrance.is_none() && self.ambient.is_none() && self.magnetic_region.is_none()
    }
}

/// One pointer region and the effects it drives
struct Region {
    tracker: InteractionTracker,
    follow: Option<Rc<RefCell<MagneticFollow>>>,
    subscription: Option<SubscriptionId>,
    spotlight: Option<SpotlightStyle>,
}

impl Region {
    fn new(name: &str) -> Self {
        Self {
            tracker: InteractionTracker::new(name),
            follow: None,
            subscription: None,
            spotlight: None,
        }
    }

    fn bind_magnetic(&mut self, config: MagneticConfig) {
        if self.follow.is_some() {
            return;
        }
        let follow = Rc::new(RefCell::new(MagneticFollow::new(config)));
        let target = Rc::clone(&follow);
        self.subscription = Some(self.tracker.subscribe(move |sample: &PointerSample| {
            target.borrow_mut().set_offset(sample.normalized);
        }));
        self.follow = Some(follow);
    }

    fn detach(&mut self) {
        if let Some(id) = self.subscription.take() {
            self.tracker.unsubscribe(id);
        }
    }
}

/// Mounted page runtime
pub struct RenderState {
    scheduler: AnimationScheduler,
    nodes: FxHashMap<ViewNodeId, NodeMotion>,
    regions: FxHashMap<String, Region>,
}

impl RenderState {
    pub fn new() -> Self {
        Self {
            scheduler: AnimationScheduler::new(),
            nodes: FxHashMap::default(),
            regions: FxHashMap::default(),
        }
    }

    /// The scheduler driving every playback
    pub fn scheduler(&self) -> &AnimationScheduler {
        &self.scheduler
    }

    pub fn is_mounted(&self) -> bool {
        !self.nodes.is_empty() || !self.regions.is_empty()
    }

    /// Arm entrances, start ambient loops and bind pointer regions for
    /// every node of `tree`. A previous mount is torn down first.
    pub fn mount(&mut self, tree: &ViewTree, options: &RenderOptions) {
        if self.is_mounted() {
            self.unmount();
        }
        let handle = self.scheduler.handle();

        // Document order visits ancestors first, so an ancestor's playback
        // always exists by the time its descendants look it up
        for (id, node) in tree.iter() {
            let motion = &node.motion;
            let mut state = NodeMotion::default();

            if let Some(spec) = &motion.entrance {
                let parent = tree
                    .entrance_ancestor(id)
                    .and_then(|ancestor| self.nodes.get(&ancestor))
                    .and_then(|m| m.entrance.as_ref())
                    .and_then(AnimatedDescriptor::id);
                let descriptor = spec.descriptor.clone();

                match (spec.viewport_amount, parent) {
                    (None, Some(parent)) => {
                        state.entrance =
                            Some(AnimatedDescriptor::new(handle.clone(), descriptor, Some(parent)));
                    }
                    (Some(amount), Some(parent)) => {
                        state.entrance =
                            Some(AnimatedDescriptor::after(handle.clone(), descriptor, parent));
                        state.trigger = Some(ViewportTrigger::new(amount));
                    }
                    (amount, None) => {
                        state.entrance =
                            Some(AnimatedDescriptor::new(handle.clone(), descriptor, None));
                        state.trigger = Some(ViewportTrigger::new(
                            amount.unwrap_or(options.viewport.default_amount),
                        ));
                    }
                }
            }

            if options.ambient {
                if let Some(descriptor) = &motion.ambient {
                    let ambient = AnimatedDescriptor::new(handle.clone(), descriptor.clone(), None);
                    ambient.start();
                    state.ambient = Some(ambient);
                }
            }

            if let Some(binding) = &motion.magnetic {
                self.region_mut(&binding.region).bind_magnetic(binding.config);
                state.magnetic_region = Some(binding.region.clone());
            }

            if let Some(binding) = &motion.spotlight {
                self.region_mut(&binding.region).spotlight = Some(binding.style);
            }

            if !state.is_empty() {
                self.nodes.insert(id, state);
            }
        }

        debug!(
            nodes = self.nodes.len(),
            regions = self.regions.len(),
            playbacks = self.scheduler.playback_count(),
            "render state mounted"
        );
    }

    fn region_mut(&mut self, name: &str) -> &mut Region {
        self.regions
            .entry(name.to_string())
            .or_insert_with(|| Region::new(name))
    }

    /// Discard every playback and region. The scheduler is empty afterwards.
    pub fn unmount(&mut self) {
        let nodes = self.nodes.len();
        self.nodes.clear();
        for region in self.regions.values_mut() {
            region.detach();
        }
        self.regions.clear();
        self.scheduler.clear();
        debug!(nodes, "render state unmounted");
    }

    // ========================================================================
    // Events
    // ========================================================================

    /// Report a node's visible fraction.
    ///
    /// Returns true when this observation fired the node's entrance. A node
    /// fires at most once for the lifetime of the mount.
    pub fn on_viewport(&mut self, node: ViewNodeId, visible_fraction: f32) -> bool {
        let Some(state) = self.nodes.get_mut(&node) else {
            return false;
        };
        let Some(trigger) = state.trigger.as_mut() else {
            return false;
        };
        if !trigger.observe(visible_fraction) {
            return false;
        }
        if let Some(entrance) = &state.entrance {
            let result = entrance.start();
            debug!(?node, ?result, "entrance triggered");
        }
        true
    }

    /// Like [`on_viewport`](Self::on_viewport), deriving the fraction from
    /// the node's bounds and the viewport
    pub fn on_viewport_bounds(&mut self, node: ViewNodeId, bounds: &Rect, viewport: &Rect) -> bool {
        self.on_viewport(node, bounds.visible_fraction(viewport))
    }

    /// Pointer moved inside `region`. Returns false for unknown regions.
    pub fn on_pointer_move(&mut self, region: &str, point: Point, bounds: &Rect) -> bool {
        match self.regions.get(region) {
            Some(r) => {
                r.tracker.pointer_move(point, bounds);
                true
            }
            None => {
                trace!(region, "pointer move for unknown region");
                false
            }
        }
    }

    /// Pointer left `region`: the sample resets and magnetic motion snaps
    /// back to rest at once
    pub fn on_pointer_leave(&mut self, region: &str) -> bool {
        let Some(r) = self.regions.get(region) else {
            return false;
        };
        r.tracker.pointer_leave();
        if let Some(follow) = &r.follow {
            follow.borrow_mut().release();
        }
        true
    }

    /// Advance all motion by `dt_ms`. Returns true while anything is still
    /// moving.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        let animating = self.scheduler.tick(dt_ms);

        let mut following = false;
        for region in self.regions.values() {
            if let Some(follow) = &region.follow {
                let mut follow = follow.borrow_mut();
                if !follow.is_settled() {
                    follow.step(dt_ms);
                }
                following |= !follow.is_settled();
            }
        }

        animating || following
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Combined entrance, ambient and magnetic state of a node.
    ///
    /// Nodes without motion are settled. Non-finite values fall back to the
    /// settled state.
    pub fn visual_state(&self, node: ViewNodeId) -> VisualState {
        let Some(motion) = self.nodes.get(&node) else {
            return VisualState::SETTLED;
        };
        let mut state = motion
            .entrance
            .as_ref()
            .map(AnimatedDescriptor::get)
            .unwrap_or(VisualState::SETTLED);

        if let Some(ambient) = &motion.ambient {
            state = compose(&state, &ambient.get());
        }
        if let Some(offset) = motion
            .magnetic_region
            .as_deref()
            .and_then(|region| self.magnetic_offset(region))
        {
            state.rotation = add3(state.rotation, offset.rotation);
            state.translation = add2(state.translation, offset.translation);
        }
        state.sanitized(&VisualState::SETTLED)
    }

    pub fn entrance_phase(&self, node: ViewNodeId) -> Option<PlaybackPhase> {
        self.nodes
            .get(&node)
            .and_then(|m| m.entrance.as_ref())
            .and_then(AnimatedDescriptor::phase)
    }

    /// Whether the node's own viewport trigger has fired
    pub fn has_entered(&self, node: ViewNodeId) -> bool {
        self.nodes
            .get(&node)
            .and_then(|m| m.trigger.as_ref())
            .is_some_and(ViewportTrigger::has_fired)
    }

    pub fn pointer_sample(&self, region: &str) -> Option<PointerSample> {
        self.regions.get(region).map(|r| r.tracker.sample())
    }

    /// Current magnetic transform of a region
    pub fn magnetic_offset(&self, region: &str) -> Option<MagneticOutput> {
        self.regions
            .get(region)
            .and_then(|r| r.follow.as_ref())
            .map(|follow| follow.borrow().output())
    }

    /// Current spotlight background of a region
    pub fn spotlight(&self, region: &str) -> Option<String> {
        let r = self.regions.get(region)?;
        let style = r.spotlight?;
        Some(style.gradient(&r.tracker.sample()))
    }

    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.regions.keys().map(String::as_str)
    }
}

impl Default for RenderState {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for RenderState {
    fn drop(&mut self) {
        for region in self.regions.values_mut() {
            region.detach();
        }
    }
}

/// Layer `over` on top of `base`: opacity and scale multiply, offsets add
fn compose(base: &VisualState, over: &VisualState) -> VisualState {
    VisualState {
        opacity: base.opacity * over.opacity,
        translation: add2(base.translation, over.translation),
        scale: base.scale * over.scale,
        rotation: add3(base.rotation, over.rotation),
        blur: base.blur + over.blur,
    }
}

fn add2(a: Vec2, b: Vec2) -> Vec2 {
    Vec2::new(a.x + b.x, a.y + b.y)
}

fn add3(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new(a.x + b.x, a.y + b.y, a.z + b.z)
}
