//! Animation scheduler
//!
//! Holds one playback per animated element and advances the running ones
//! each frame. Everything runs on the UI thread: the scheduler shares its
//! state through `Rc<RefCell<_>>` and hands out weak [`SchedulerHandle`]s that
//! never keep it alive.
//!
//! Playback lifecycle:
//!
//! ```text
//! Armed ──start──▶ Running ──(one-shot finished)──▶ Settled
//! ```
//!
//! - A playback starts at most once. Starting a running or settled playback
//!   is a no-op, so an entrance can never replay.
//! - A child playback never starts before its parent. Starting a child whose
//!   parent is still armed defers it, and the deferred child starts together
//!   with the parent.
//! - Only running playbacks are visited by [`AnimationScheduler::tick`], so a
//!   frame costs O(animating elements), not O(page).
//! - Loops never settle. They run until their playback is removed, and
//!   their clock wraps every period so it never grows without bound.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use crate::descriptor::{AnimationDescriptor, VisualState};

new_key_type! {
    /// Handle to a registered playback
    pub struct PlaybackId;
}

/// Where a playback is in its lifecycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackPhase {
    /// Registered, holding its initial state
    Armed,
    /// Advancing every tick
    Running,
    /// One-shot finished, holding its final state
    Settled,
}

/// Result of asking a playback to start
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartResult {
    /// Now running
    Started,
    /// Parent still armed; will start with the parent
    Deferred,
    /// Already running or settled; nothing changed
    AlreadyStarted,
    /// No such playback
    Missing,
}

struct Playback {
    descriptor: AnimationDescriptor,
    parent: Option<PlaybackId>,
    children: SmallVec<[PlaybackId; 4]>,
    phase: PlaybackPhase,
    elapsed_ms: f32,
    /// Start as soon as the parent starts
    follows_parent: bool,
}

/// Internal state of the animation scheduler
struct SchedulerInner {
    playbacks: SlotMap<PlaybackId, Playback>,
    /// Running playbacks, in start order
    active: Vec<PlaybackId>,
}

impl SchedulerInner {
    fn insert(
        &mut self,
        descriptor: AnimationDescriptor,
        parent: Option<PlaybackId>,
        follows_parent: bool,
    ) -> PlaybackId {
        let parent = parent.filter(|p| self.playbacks.contains_key(*p));
        let id = self.playbacks.insert(Playback {
            descriptor,
            parent,
            children: SmallVec::new(),
            phase: PlaybackPhase::Armed,
            elapsed_ms: 0.0,
            follows_parent: follows_parent && parent.is_some(),
        });
        if let Some(parent_id) = parent {
            if let Some(p) = self.playbacks.get_mut(parent_id) {
                p.children.push(id);
            }
        }
        // A child of an already started parent follows immediately
        if follows_parent {
            if let Some(parent_id) = parent {
                if self.phase(parent_id) != Some(PlaybackPhase::Armed) {
                    self.start(id);
                }
            }
        }
        id
    }

    fn phase(&self, id: PlaybackId) -> Option<PlaybackPhase> {
        self.playbacks.get(id).map(|p| p.phase)
    }

    fn start(&mut self, id: PlaybackId) -> StartResult {
        let (phase, parent) = match self.playbacks.get(id) {
            Some(p) => (p.phase, p.parent),
            None => return StartResult::Missing,
        };
        if phase != PlaybackPhase::Armed {
            return StartResult::AlreadyStarted;
        }
        if let Some(parent_id) = parent {
            if self.phase(parent_id) == Some(PlaybackPhase::Armed) {
                if let Some(p) = self.playbacks.get_mut(id) {
                    p.follows_parent = true;
                }
                tracing::trace!(?id, "playback deferred until parent starts");
                return StartResult::Deferred;
            }
        }

        // Start this playback and every follower beneath it, parents first
        let mut queue: SmallVec<[PlaybackId; 8]> = SmallVec::new();
        queue.push(id);
        while let Some(next) = queue.pop() {
            let children = match self.playbacks.get_mut(next) {
                Some(playback) if playback.phase == PlaybackPhase::Armed => {
                    playback.phase = PlaybackPhase::Running;
                    playback.elapsed_ms = 0.0;
                    tracing::debug!(id = ?next, delay_ms = playback.descriptor.delay_ms, "playback started");
                    playback.children.clone()
                }
                _ => continue,
            };
            self.active.push(next);

            for &child in children.iter().rev() {
                if self
                    .playbacks
                    .get(child)
                    .is_some_and(|c| c.follows_parent && c.phase == PlaybackPhase::Armed)
                {
                    queue.push(child);
                }
            }
        }
        StartResult::Started
    }

    fn remove(&mut self, id: PlaybackId) -> bool {
        let Some(playback) = self.playbacks.remove(id) else {
            return false;
        };
        self.active.retain(|a| *a != id);
        if let Some(parent_id) = playback.parent {
            if let Some(parent) = self.playbacks.get_mut(parent_id) {
                parent.children.retain(|c| *c != id);
            }
        }
        for child in playback.children {
            if let Some(c) = self.playbacks.get_mut(child) {
                c.parent = None;
                c.follows_parent = false;
            }
        }
        tracing::trace!(?id, "playback removed");
        true
    }

    fn sample(&self, id: PlaybackId) -> Option<VisualState> {
        self.playbacks.get(id).map(|p| match p.phase {
            PlaybackPhase::Armed => p.descriptor.initial.sanitized(&p.descriptor.final_state),
            PlaybackPhase::Running => p.descriptor.sample(p.elapsed_ms),
            PlaybackPhase::Settled => p.descriptor.final_state,
        })
    }
}

/// The animation scheduler that ticks all running playbacks
///
/// This is typically held by the render state and shared via
/// [`SchedulerHandle`].
pub struct AnimationScheduler {
    inner: Rc<RefCell<SchedulerInner>>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(SchedulerInner {
                playbacks: SlotMap::with_key(),
                active: Vec::new(),
            })),
        }
    }

    /// Get a weak handle for registering playbacks
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Register an armed playback
    pub fn add(&self, descriptor: AnimationDescriptor) -> PlaybackId {
        self.inner.borrow_mut().insert(descriptor, None, false)
    }

    /// Register a playback that starts together with `parent`.
    ///
    /// If the parent is already running the child starts right away.
    pub fn add_child(&self, parent: PlaybackId, descriptor: AnimationDescriptor) -> PlaybackId {
        self.inner.borrow_mut().insert(descriptor, Some(parent), true)
    }

    /// Register a playback ordered after `parent` that still waits for its
    /// own `start`. Starting it while the parent is armed defers it.
    pub fn add_after(&self, parent: PlaybackId, descriptor: AnimationDescriptor) -> PlaybackId {
        self.inner.borrow_mut().insert(descriptor, Some(parent), false)
    }

    /// Start a playback. See [`StartResult`] for the outcomes.
    pub fn start(&self, id: PlaybackId) -> StartResult {
        self.inner.borrow_mut().start(id)
    }

    /// Advance running playbacks by `dt_ms` milliseconds.
    ///
    /// Returns true while anything is still running.
    pub fn tick(&self, dt_ms: f32) -> bool {
        let dt_ms = if dt_ms.is_finite() { dt_ms.max(0.0) } else { 0.0 };
        let mut inner = self.inner.borrow_mut();
        let SchedulerInner { playbacks, active } = &mut *inner;

        active.retain(|id| {
            let Some(playback) = playbacks.get_mut(*id) else {
                return false;
            };
            playback.elapsed_ms = playback
                .descriptor
                .wrap_elapsed(playback.elapsed_ms + dt_ms);
            if playback.descriptor.is_settled_at(playback.elapsed_ms) {
                playback.phase = PlaybackPhase::Settled;
                tracing::trace!(?id, "playback settled");
                false
            } else {
                true
            }
        });
        !active.is_empty()
    }

    /// Current visual state of a playback
    pub fn sample(&self, id: PlaybackId) -> Option<VisualState> {
        self.inner.borrow().sample(id)
    }

    pub fn phase(&self, id: PlaybackId) -> Option<PlaybackPhase> {
        self.inner.borrow().phase(id)
    }

    /// Remove a playback. Its children stay registered but are detached.
    pub fn remove(&self, id: PlaybackId) -> bool {
        self.inner.borrow_mut().remove(id)
    }

    /// Drop every playback
    pub fn clear(&self) {
        let mut inner = self.inner.borrow_mut();
        let count = inner.playbacks.len();
        inner.playbacks.clear();
        inner.active.clear();
        tracing::debug!(count, "scheduler cleared");
    }

    /// Number of registered playbacks
    pub fn playback_count(&self) -> usize {
        self.inner.borrow().playbacks.len()
    }

    /// Number of running playbacks
    pub fn active_count(&self) -> usize {
        self.inner.borrow().active.len()
    }

    /// Check if any playback is running
    pub fn has_active(&self) -> bool {
        !self.inner.borrow().active.is_empty()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// A weak handle to the animation scheduler
///
/// Passed to whatever needs to register playbacks. It won't prevent the
/// scheduler from being dropped; every operation on a dead handle is a no-op.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<RefCell<SchedulerInner>>,
}

impl SchedulerHandle {
    /// Register an armed playback, optionally following a parent
    pub fn register(
        &self,
        descriptor: AnimationDescriptor,
        parent: Option<PlaybackId>,
    ) -> Option<PlaybackId> {
        self.inner.upgrade().map(|inner| {
            inner
                .borrow_mut()
                .insert(descriptor, parent, parent.is_some())
        })
    }

    /// Register an armed playback ordered after `parent`, see
    /// [`AnimationScheduler::add_after`]
    pub fn register_after(
        &self,
        descriptor: AnimationDescriptor,
        parent: PlaybackId,
    ) -> Option<PlaybackId> {
        self.inner
            .upgrade()
            .map(|inner| inner.borrow_mut().insert(descriptor, Some(parent), false))
    }

    pub fn start(&self, id: PlaybackId) -> StartResult {
        self.inner
            .upgrade()
            .map(|inner| inner.borrow_mut().start(id))
            .unwrap_or(StartResult::Missing)
    }

    pub fn sample(&self, id: PlaybackId) -> Option<VisualState> {
        self.inner
            .upgrade()
            .and_then(|inner| inner.borrow().sample(id))
    }

    pub fn phase(&self, id: PlaybackId) -> Option<PlaybackPhase> {
        self.inner.upgrade().and_then(|inner| inner.borrow().phase(id))
    }

    pub fn remove(&self, id: PlaybackId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.borrow_mut().remove(id);
        }
    }

    /// Check if the scheduler is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

// ============================================================================
// Animated Descriptor
// ============================================================================

/// A playback that removes itself from the scheduler when dropped
///
/// Owning one per animated element ties the playback's lifetime to the
/// element's: unmounting drops the owner and no ticking work is left behind.
///
/// # Example
///
/// ```rust
/// use folio_animation::{build_entrance, AnimatedDescriptor, AnimationScheduler, Entrance};
///
/// let scheduler = AnimationScheduler::new();
/// {
///     let card = AnimatedDescriptor::new(scheduler.handle(), build_entrance(Entrance::Up, 0), None);
///     card.start();
///     assert_eq!(scheduler.playback_count(), 1);
/// }
/// assert_eq!(scheduler.playback_count(), 0);
/// ```
pub struct AnimatedDescriptor {
    handle: SchedulerHandle,
    id: Option<PlaybackId>,
    descriptor: AnimationDescriptor,
}

impl AnimatedDescriptor {
    /// Register a playback. With a parent, it starts together with the parent.
    pub fn new(
        handle: SchedulerHandle,
        descriptor: AnimationDescriptor,
        parent: Option<PlaybackId>,
    ) -> Self {
        let id = handle.register(descriptor.clone(), parent);
        Self {
            handle,
            id,
            descriptor,
        }
    }

    /// Register a playback that waits for `parent` but only starts when
    /// asked
    pub fn after(handle: SchedulerHandle, descriptor: AnimationDescriptor, parent: PlaybackId) -> Self {
        let id = handle.register_after(descriptor.clone(), parent);
        Self {
            handle,
            id,
            descriptor,
        }
    }

    pub fn id(&self) -> Option<PlaybackId> {
        self.id
    }

    pub fn descriptor(&self) -> &AnimationDescriptor {
        &self.descriptor
    }

    pub fn start(&self) -> StartResult {
        match self.id {
            Some(id) => self.handle.start(id),
            None => StartResult::Missing,
        }
    }

    /// Current visual state. Falls back to the final state if the scheduler
    /// is gone, so a detached element still renders settled.
    pub fn get(&self) -> VisualState {
        self.id
            .and_then(|id| self.handle.sample(id))
            .unwrap_or(self.descriptor.final_state)
    }

    pub fn phase(&self) -> Option<PlaybackPhase> {
        self.id.and_then(|id| self.handle.phase(id))
    }
}

impl Drop for AnimatedDescriptor {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.handle.remove(id);
        }
    }
}
