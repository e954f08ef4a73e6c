//! Mutex-backed lockable base.
//!
//! This module provides `Locker`, the unit that guarded collections compose
//! to turn every public call into one critical section.

use std::fmt;
use std::sync::{Mutex, PoisonError};

use tracing::warn;

/// Owns a piece of collection state behind one exclusive lock.
///
/// Every access goes through [`Locker::apply`], which acquires the lock,
/// runs the closure against the state and releases the lock on every exit
/// path, including unwinding out of the closure.
///
/// # Poisoning
///
/// A panic inside a closure poisons the mutex. The next call recovers the
/// state as the panicking call left it, clears the poison flag and logs a
/// warning once; callers never see a `PoisonError`.
///
/// # Reentrancy
///
/// The closure must not call back into the collection that owns this
/// `Locker`. The lock is not reentrant and such a call deadlocks.
///
pub struct Locker<S> {
    state: Mutex<S>,
}

impl<S> Locker<S> {
    /// Creates a locker owning `state`.
    pub fn new(state: S) -> Self {
        Locker {
            state: Mutex::new(state),
        }
    }

    /// Runs `f` against the state while holding the lock.
    ///
    pub fn apply<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut S) -> R,
    {
        let mut state = self.state.lock().unwrap_or_else(|poisoned| {
            warn!("recovering collection state from a poisoned lock");
            self.state.clear_poison();
            PoisonError::into_inner(poisoned)
        });
        f(&mut state)
    }

    /// Exclusive access without locking, for owners holding `&mut self`.
    ///
    pub fn get_mut(&mut self) -> &mut S {
        self.state.clear_poison();
        self.state.get_mut().unwrap_or_else(PoisonError::into_inner)
    }

    /// Consumes the locker and returns the state.
    ///
    pub fn into_inner(self) -> S {
        self.state
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S: Default> Default for Locker<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S: fmt::Debug> fmt::Debug for Locker<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.apply(|state| f.debug_struct("Locker").field("state", &*state).finish())
    }
}
