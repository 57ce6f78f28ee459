//! Generic observable value container.
//!
//! [`Writable`] holds a single value and a list of subscribers notified
//! synchronously on every mutation, in registration order. It is the
//! reactive primitive the theme store is built on: single-threaded,
//! `Rc`-shared, no locks.

#[cfg(test)]
#[path = "observable_test.rs"]
mod observable_test;

use std::cell::RefCell;
use std::rc::Rc;

type Callback<T> = Rc<RefCell<dyn FnMut(T)>>;

struct Entry<T> {
    id: u64,
    callback: Callback<T>,
}

struct Inner<T> {
    value: T,
    next_id: u64,
    subscribers: Vec<Entry<T>>,
}

/// A shareable reactive value.
///
/// Cloning the handle shares the underlying value and subscriber list.
pub struct Writable<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Writable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> Writable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Current value.
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Replace the value, then notify all subscribers with the new value.
    ///
    /// Notification is synchronous. A subscriber whose callback re-enters
    /// `set` is skipped for that nested mutation (its callback is already
    /// running); it can read the final value itself via [`get`](Self::get).
    /// Other subscribers are notified for both mutations.
    pub fn set(&self, value: T) {
        self.inner.borrow_mut().value = value.clone();
        self.notify(value);
    }

    /// Compute the next value from the current one, then [`set`](Self::set) it.
    pub fn update(&self, f: impl FnOnce(T) -> T) {
        let next = f(self.get());
        self.set(next);
    }

    /// Register a subscriber.
    ///
    /// The callback runs immediately with the current value, then once per
    /// mutation until the returned handle is unsubscribed. Dropping the
    /// handle without calling [`Subscription::unsubscribe`] leaves the
    /// subscription active.
    pub fn subscribe(&self, callback: impl FnMut(T) + 'static) -> Subscription {
        let callback: Callback<T> = Rc::new(RefCell::new(callback));
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.push(Entry {
                id,
                callback: Rc::clone(&callback),
            });
            id
        };
        (callback.borrow_mut())(self.get());

        let weak = Rc::downgrade(&self.inner);
        Subscription {
            cancel: Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.borrow_mut().subscribers.retain(|entry| entry.id != id);
                }
            }),
        }
    }

    // Snapshot the subscriber list so a callback can subscribe, unsubscribe,
    // or mutate the value without hitting an active borrow. A subscriber
    // removed mid-notification is skipped; a callback that re-enters `set`
    // skips its own nested invocation.
    fn notify(&self, value: T) {
        let snapshot: Vec<(u64, Callback<T>)> = self
            .inner
            .borrow()
            .subscribers
            .iter()
            .map(|entry| (entry.id, Rc::clone(&entry.callback)))
            .collect();
        for (id, callback) in snapshot {
            let still_subscribed = {
                let inner = self.inner.borrow();
                inner.subscribers.iter().any(|entry| entry.id == id)
            };
            if !still_subscribed {
                continue;
            }
            if let Ok(mut callback) = callback.try_borrow_mut() {
                callback(value.clone());
            }
        }
    }
}

/// Handle that deregisters one subscriber.
pub struct Subscription {
    cancel: Box<dyn FnOnce()>,
}

impl Subscription {
    /// Remove the subscriber. Later mutations no longer invoke it.
    pub fn unsubscribe(self) {
        (self.cancel)();
    }
}
