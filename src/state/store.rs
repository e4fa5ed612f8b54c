#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A single-threaded observable value container.
///
/// `Store` holds a current value and a list of subscribers. `set` and
/// `update` replace the value and then notify every subscriber
/// synchronously, in the order the subscriptions were registered, with the
/// value as of the start of the notification pass.
///
/// The container is `Rc`-backed: clones share the same value and subscriber
/// list. This is the cooperative single-threaded model of the WASM client;
/// there is no locking and no cross-thread sharing.
///
/// REENTRANCY
/// ==========
/// A subscriber may subscribe or unsubscribe during a notification pass
/// without corrupting delivery to the other subscribers: the notifier walks
/// a snapshot of the list and skips entries that were removed mid-pass. A
/// subscriber added mid-pass is first notified on the next `set`. A
/// reentrant `set` from inside a callback starts a nested pass; a callback
/// that is already running is skipped by that nested pass.
pub struct Store<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

type Callback<T> = Rc<RefCell<dyn FnMut(&T)>>;

struct Inner<T> {
    value: T,
    next_id: u64,
    subscribers: Vec<(u64, Callback<T>)>,
}

/// Handle returned by [`Store::subscribe`].
///
/// Dropping the handle leaves the subscription active; only an explicit
/// [`Subscription::unsubscribe`] removes it. This mirrors the usual
/// reactive-store contract where the returned unsubscriber may be ignored
/// for app-lifetime subscriptions.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Remove the subscription. No further notifications are delivered.
    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<T: Clone + Default + 'static> Default for Store<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Store<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Store")
            .field("value", &inner.value)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

impl<T: Clone + 'static> Store<T> {
    /// Create a store holding `value` with no subscribers.
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Return a clone of the current value.
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Replace the value and notify subscribers.
    pub fn set(&self, value: T) {
        self.inner.borrow_mut().value = value;
        self.notify();
    }

    /// Mutate the value in place and notify subscribers.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.inner.borrow_mut().value);
        self.notify();
    }

    /// Register `f` to be called after every value change.
    ///
    /// Subscribers are notified in registration order. The callback is not
    /// invoked with the current value at subscribe time.
    pub fn subscribe(&self, f: impl FnMut(&T) + 'static) -> Subscription {
        let callback: Callback<T> = Rc::new(RefCell::new(f));
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.push((id, callback));
            id
        };

        let weak = Rc::downgrade(&self.inner);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().subscribers.retain(|(sid, _)| *sid != id);
                }
            })),
        }
    }

    fn notify(&self) {
        // Snapshot the value and the subscriber list so callbacks can
        // subscribe/unsubscribe without invalidating the iteration.
        let (value, snapshot) = {
            let inner = self.inner.borrow();
            let snapshot: Vec<(u64, Callback<T>)> = inner
                .subscribers
                .iter()
                .map(|(id, cb)| (*id, Rc::clone(cb)))
                .collect();
            (inner.value.clone(), snapshot)
        };

        for (id, callback) in snapshot {
            // Skip subscribers removed earlier in this pass.
            let live = self
                .inner
                .borrow()
                .subscribers
                .iter()
                .any(|(sid, _)| *sid == id);
            if !live {
                continue;
            }
            // A callback still running (reentrant `set`) is skipped rather
            // than re-entered.
            if let Ok(mut f) = callback.try_borrow_mut() {
                f(&value);
            }
        }
    }
}
