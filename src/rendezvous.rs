// File: rendezvous.rs
// Location: /src/rendezvous.rs

use std::sync::{Arc, Condvar, Mutex, MutexGuard};

/// One-shot latched signal between two threads: the UI thread fulfills it
/// once, the calling thread blocks until it is fulfilled.
///
/// The signal is latched, not edge-triggered: fulfilling before the waiter
/// arrives still wakes it. Spurious condition-variable wake-ups are absorbed
/// by re-checking the slot, so `wait` returns only on a genuine signal.
pub struct Rendezvous<T> {
    inner: Arc<Inner<T>>,
}

struct Inner<T> {
    slot: Mutex<Option<T>>,
    ready: Condvar,
}

impl<T> Clone for Rendezvous<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for Rendezvous<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Rendezvous<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                slot: Mutex::new(None),
                ready: Condvar::new(),
            }),
        }
    }

    /// Fulfills the rendezvous. The first signal wins; a later one is
    /// dropped and reported with `false`.
    pub fn signal(&self, value: T) -> bool {
        let mut slot = self.lock_slot();
        if slot.is_some() {
            return false;
        }
        *slot = Some(value);
        self.inner.ready.notify_all();
        true
    }

    /// Blocks the calling thread until the rendezvous is fulfilled, then
    /// takes the value. The wait is unbounded.
    pub fn wait(&self) -> T {
        let mut slot = self.lock_slot();
        loop {
            if let Some(value) = slot.take() {
                return value;
            }
            slot = match self.inner.ready.wait(slot) {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
        }
    }

    // A poisoned mutex only means the other side panicked between lock and
    // unlock; the slot itself is still a valid Option.
    fn lock_slot(&self) -> MutexGuard<'_, Option<T>> {
        match self.inner.slot.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_signal_then_wait_is_latched() {
        // Fulfilled before any waiter exists; the signal must not be lost.
        let rendezvous = Rendezvous::new();
        assert!(rendezvous.signal(7));
        assert_eq!(rendezvous.wait(), 7);
    }

    #[test]
    fn test_wait_blocks_until_signal() {
        let rendezvous = Rendezvous::new();
        let waiter = {
            let rendezvous = rendezvous.clone();
            thread::spawn(move || rendezvous.wait())
        };

        thread::sleep(Duration::from_millis(50));
        assert!(!waiter.is_finished());

        assert!(rendezvous.signal("done"));
        assert_eq!(waiter.join().unwrap(), "done");
    }

    #[test]
    fn test_first_signal_wins() {
        let rendezvous = Rendezvous::new();
        assert!(rendezvous.signal(1));
        assert!(!rendezvous.signal(2));
        assert_eq!(rendezvous.wait(), 1);
    }

    #[test]
    fn test_spurious_wakeups_do_not_release_the_waiter() {
        let rendezvous = Rendezvous::new();
        let waiter = {
            let rendezvous = rendezvous.clone();
            thread::spawn(move || rendezvous.wait())
        };

        // Hammer the condvar without fulfilling the slot; the waiter must
        // re-check and keep blocking.
        for _ in 0..20 {
            rendezvous.inner.ready.notify_all();
            thread::sleep(Duration::from_millis(5));
        }
        assert!(!waiter.is_finished());

        assert!(rendezvous.signal(42));
        assert_eq!(waiter.join().unwrap(), 42);
    }

    #[test]
    fn test_signal_from_another_thread() {
        let rendezvous = Rendezvous::new();
        let signaler = {
            let rendezvous = rendezvous.clone();
            thread::spawn(move || {
                thread::sleep(Duration::from_millis(20));
                rendezvous.signal(String::from("resolved"))
            })
        };

        assert_eq!(rendezvous.wait(), "resolved");
        assert!(signaler.join().unwrap());
    }
}
