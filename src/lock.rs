//! Mutual exclusion around emissions.
//!
//! The logger does not serialize emissions itself. A host that logs from
//! several threads installs a [`LockProvider`]; the logger calls
//! [`acquire`](LockProvider::acquire) before touching any sink and
//! [`release`](LockProvider::release) afterwards, strictly paired and never
//! nested.

use parking_lot::{Condvar, Mutex};

/// Host-supplied acquire/release pair invoked around each emission.
pub trait LockProvider: Send + Sync {
    fn acquire(&self);
    fn release(&self);
}

/// Adapts a plain `(user_data, acquiring)` callback into a [`LockProvider`].
///
/// `acquiring` is `true` before the emission and `false` after it.
pub struct CallbackLock<T> {
    data: T,
    callback: fn(&T, bool),
}

impl<T> CallbackLock<T> {
    pub fn new(data: T, callback: fn(&T, bool)) -> Self {
        Self { data, callback }
    }

    pub fn data(&self) -> &T {
        &self.data
    }
}

impl<T: Send + Sync> LockProvider for CallbackLock<T> {
    fn acquire(&self) {
        (self.callback)(&self.data, true);
    }

    fn release(&self) {
        (self.callback)(&self.data, false);
    }
}

/// Binary semaphore giving real mutual exclusion between threads.
///
/// Unlike a mutex guard, the held state is not tied to a scope, which is what
/// a split acquire/release interface needs.
#[derive(Debug, Default)]
pub struct BlockingLock {
    held: Mutex<bool>,
    freed: Condvar,
}

impl BlockingLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_held(&self) -> bool {
        *self.held.lock()
    }
}

impl LockProvider for BlockingLock {
    fn acquire(&self) {
        let mut held = self.held.lock();
        while *held {
            self.freed.wait(&mut held);
        }
        *held = true;
    }

    fn release(&self) {
        *self.held.lock() = false;
        self.freed.notify_one();
    }
}

/// Holds a provider acquired until dropped.
pub(crate) struct HeldLock<'a> {
    provider: &'a dyn LockProvider,
}

impl<'a> HeldLock<'a> {
    pub(crate) fn acquire(provider: &'a dyn LockProvider) -> Self {
        provider.acquire();
        Self { provider }
    }
}

impl Drop for HeldLock<'_> {
    fn drop(&mut self) {
        self.provider.release();
    }
}
