//! Observable value cells
//!
//! A [`ValueCell`] holds exactly one value and notifies subscribers on every
//! write. There is no history and no queue: the latest write wins, and
//! `reset` writes the cell's neutral value back.
//!
//! Cells are single-threaded. All Folio work runs on one UI thread, so the
//! cell shares its state through `Rc<RefCell<_>>` rather than locks.
//!
//! # Example
//!
//! ```rust
//! use folio_core::ValueCell;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let cell = ValueCell::new(0i32);
//! let seen = Rc::new(Cell::new(0));
//! let seen_clone = seen.clone();
//! let _sub = cell.subscribe(move |v| seen_clone.set(*v));
//!
//! cell.set(5);
//! assert_eq!(seen.get(), 5);
//! cell.reset();
//! assert_eq!(cell.get(), 0);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Identifier for a cell subscription
    pub struct SubscriptionId;
}

type Callback<T> = Rc<dyn Fn(&T)>;

struct CellInner<T> {
    value: T,
    neutral: T,
    subscribers: SlotMap<SubscriptionId, Callback<T>>,
}

/// A shared, observable, last-write-wins value
///
/// Cloning a `ValueCell` yields another handle to the same value.
pub struct ValueCell<T: Clone + 'static> {
    inner: Rc<RefCell<CellInner<T>>>,
}

impl<T: Clone + 'static> Clone for ValueCell<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Default + 'static> ValueCell<T> {
    /// Create a cell whose neutral value is `T::default()`
    pub fn new(value: T) -> Self {
        Self::with_neutral(value, T::default())
    }
}

impl<T: Clone + Default + 'static> Default for ValueCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + 'static> ValueCell<T> {
    /// Create a cell with an explicit neutral value used by [`reset`](Self::reset)
    pub fn with_neutral(value: T, neutral: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(CellInner {
                value,
                neutral,
                subscribers: SlotMap::with_key(),
            })),
        }
    }

    /// Get a copy of the current value
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Read the current value without cloning it
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// Overwrite the value and notify subscribers
    pub fn set(&self, value: T) {
        self.inner.borrow_mut().value = value;
        self.notify();
    }

    /// Write the neutral value back and notify subscribers
    pub fn reset(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.value = inner.neutral.clone();
        }
        self.notify();
    }

    /// Subscribe to writes. The callback runs after every `set` and `reset`.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&T) + 'static,
    {
        self.inner.borrow_mut().subscribers.insert(Rc::new(callback))
    }

    /// Remove a subscription. Returns false if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.borrow_mut().subscribers.remove(id).is_some()
    }

    /// Number of live subscriptions
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    fn notify(&self) {
        // Callbacks may read the cell, so release the borrow before calling them
        let (value, callbacks): (T, Vec<Callback<T>>) = {
            let inner = self.inner.borrow();
            (
                inner.value.clone(),
                inner.subscribers.values().cloned().collect(),
            )
        };
        tracing::trace!(subscribers = callbacks.len(), "value cell notify");
        for callback in callbacks {
            callback(&value);
        }
    }
}

impl<T: Clone + std::fmt::Debug + 'static> std::fmt::Debug for ValueCell<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ValueCell")
            .field("value", &inner.value)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_last_write_wins() {
        let cell = ValueCell::new(1);
        cell.set(2);
        cell.set(3);
        assert_eq!(cell.get(), 3);
    }

    #[test]
    fn test_notify_on_every_write() {
        let cell = ValueCell::new(0u32);
        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();
        cell.subscribe(move |_| count_clone.set(count_clone.get() + 1));

        cell.set(1);
        cell.set(1);
        cell.reset();
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn test_reset_uses_neutral() {
        let cell = ValueCell::with_neutral(7, -1);
        cell.reset();
        assert_eq!(cell.get(), -1);
    }

    #[test]
    fn test_unsubscribe() {
        let cell = ValueCell::new(0);
        let hits = Rc::new(Cell::new(0));
        let hits_clone = hits.clone();
        let id = cell.subscribe(move |_| hits_clone.set(hits_clone.get() + 1));

        assert!(cell.unsubscribe(id));
        assert!(!cell.unsubscribe(id));
        cell.set(9);
        assert_eq!(hits.get(), 0);
        assert_eq!(cell.subscriber_count(), 0);
    }

    #[test]
    fn test_subscriber_can_read_cell() {
        let cell = ValueCell::new(0);
        let reader = cell.clone();
        let seen = Rc::new(Cell::new(0));
        let seen_clone = seen.clone();
        cell.subscribe(move |_| seen_clone.set(reader.get()));

        cell.set(42);
        assert_eq!(seen.get(), 42);
    }
}
