//! Thread-scoped, releasable storage owned by one analyzer.
//!
//! A [`ThreadScopedSlot`] keeps at most one value per calling thread. Values are
//! keyed by [`ThreadId`], so no thread can observe or overwrite another
//! thread's entry. Once [`ThreadScopedSlot::release`] has run, every value is
//! dropped and all further access fails with
//! [`SarissaError::ResourceReleased`].
//!
//! Lookups share a read lock; the write lock is only taken when a thread
//! stores a value (once per thread and cache key in practice), on purge and
//! on release.
//!
//! Each entry also holds a weak handle to a token owned by its thread's
//! thread-local storage. The token dies with the thread, and every `set`
//! drops the values of threads that have exited.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};
use std::thread::{self, ThreadId};

use ahash::AHashMap;
use parking_lot::RwLock;

use crate::error::{Result, SarissaError};

thread_local! {
    static THREAD_TOKEN: Arc<()> = Arc::new(());
}

/// Weak handle that stops upgrading once the calling thread has exited.
fn thread_liveness() -> Weak<()> {
    // Thread-local storage already torn down: the entry is dead on arrival.
    THREAD_TOKEN
        .try_with(Arc::downgrade)
        .unwrap_or_default()
}

struct Entry<T> {
    owner: Weak<()>,
    value: T,
}

impl<T> Entry<T> {
    fn is_alive(&self) -> bool {
        self.owner.strong_count() > 0
    }
}

/// Per-thread storage cell with an explicit, permanent release.
pub struct ThreadScopedSlot<T> {
    released: AtomicBool,
    values: RwLock<AHashMap<ThreadId, Entry<T>>>,
}

impl<T: Clone> ThreadScopedSlot<T> {
    /// Create an empty, active slot.
    pub fn new() -> Self {
        ThreadScopedSlot {
            released: AtomicBool::new(false),
            values: RwLock::new(AHashMap::new()),
        }
    }

    /// The calling thread's value, if one was stored.
    pub fn get(&self) -> Result<Option<T>> {
        self.ensure_active()?;
        let values = self.values.read();
        // release() may have completed while we waited for the lock.
        self.ensure_active()?;
        Ok(values
            .get(&thread::current().id())
            .map(|entry| entry.value.clone()))
    }

    /// Store `value` for the calling thread, replacing any previous value.
    ///
    /// Values left behind by exited threads are dropped as well.
    pub fn set(&self, value: T) -> Result<()> {
        let entry = Entry {
            owner: thread_liveness(),
            value,
        };

        self.ensure_active()?;
        let mut values = self.values.write();
        self.ensure_active()?;
        let previous = values.insert(thread::current().id(), entry);
        let dead = Self::take_dead(&mut values);
        drop(values);
        drop(previous);
        drop(dead);
        Ok(())
    }

    /// Drop the values of threads that have exited. Returns how many were
    /// dropped.
    pub fn purge(&self) -> usize {
        let dead = Self::take_dead(&mut self.values.write());
        dead.len()
    }

    /// Permanently release the slot and drop every thread's value.
    ///
    /// Returns `true` for the call that performed the release; later calls
    /// are no-ops.
    pub fn release(&self) -> bool {
        if self.released.swap(true, Ordering::AcqRel) {
            return false;
        }

        let values = std::mem::take(&mut *self.values.write());
        drop(values);
        true
    }

    /// Whether [`release`](Self::release) has been called.
    pub fn is_released(&self) -> bool {
        self.released.load(Ordering::Acquire)
    }

    /// Number of values held, including those of exited threads not yet
    /// purged.
    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    /// Whether no thread holds a value.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn take_dead(values: &mut AHashMap<ThreadId, Entry<T>>) -> Vec<Entry<T>> {
        let dead: Vec<ThreadId> = values
            .iter()
            .filter(|(_, entry)| !entry.is_alive())
            .map(|(id, _)| *id)
            .collect();
        dead.iter().filter_map(|id| values.remove(id)).collect()
    }

    fn ensure_active(&self) -> Result<()> {
        if self.is_released() {
            return Err(SarissaError::resource_released(
                "this analyzer has been closed",
            ));
        }
        Ok(())
    }
}

impl<T: Clone> Default for ThreadScopedSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ThreadScopedSlot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThreadScopedSlot")
            .field("released", &self.released.load(Ordering::Acquire))
            .field("threads", &self.values.read().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Barrier;

    #[test]
    fn test_get_set_on_one_thread() {
        let slot = ThreadScopedSlot::new();
        assert_eq!(slot.get().unwrap(), None);

        slot.set(1).unwrap();
        assert_eq!(slot.get().unwrap(), Some(1));

        slot.set(2).unwrap();
        assert_eq!(slot.get().unwrap(), Some(2));
        assert_eq!(slot.len(), 1);
    }

    #[test]
    fn test_threads_do_not_see_each_other() {
        let slot = Arc::new(ThreadScopedSlot::new());
        slot.set("main".to_string()).unwrap();

        let barrier = Arc::new(Barrier::new(4));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let slot = Arc::clone(&slot);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    assert_eq!(slot.get().unwrap(), None);
                    slot.set(format!("worker-{i}")).unwrap();
                    barrier.wait();
                    assert_eq!(slot.get().unwrap(), Some(format!("worker-{i}")));
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(slot.get().unwrap(), Some("main".to_string()));
        assert_eq!(slot.len(), 5);
    }

    #[test]
    fn test_release_is_permanent_and_idempotent() {
        let slot = ThreadScopedSlot::new();
        slot.set(Arc::new(7)).unwrap();
        let value = slot.get().unwrap().unwrap();

        assert!(slot.release());
        assert!(!slot.release());
        assert!(slot.is_released());
        assert!(slot.is_empty());
        assert_eq!(Arc::strong_count(&value), 1);

        assert!(slot.get().unwrap_err().is_resource_released());
        assert!(slot.set(Arc::new(8)).unwrap_err().is_resource_released());
    }

    #[test]
    fn test_release_fails_every_thread() {
        let slot = Arc::new(ThreadScopedSlot::new());
        let worker_slot = Arc::clone(&slot);
        thread::spawn(move || worker_slot.set(1).unwrap())
            .join()
            .unwrap();

        slot.release();

        let worker_slot = Arc::clone(&slot);
        let err = thread::spawn(move || worker_slot.get())
            .join()
            .unwrap()
            .unwrap_err();
        assert!(err.is_resource_released());
    }

    #[test]
    fn test_release_races_with_access() {
        let slot = Arc::new(ThreadScopedSlot::new());
        let barrier = Arc::new(Barrier::new(9));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let slot = Arc::clone(&slot);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    for n in 0..1_000 {
                        match slot.set(i * 10_000 + n) {
                            Ok(()) => {}
                            Err(e) => {
                                assert!(e.is_resource_released());
                                break;
                            }
                        }
                        match slot.get() {
                            Ok(value) => assert_eq!(value, Some(i * 10_000 + n)),
                            Err(e) => {
                                assert!(e.is_resource_released());
                                break;
                            }
                        }
                    }
                })
            })
            .collect();

        barrier.wait();
        slot.release();

        for handle in handles {
            handle.join().unwrap();
        }
        assert!(slot.is_empty());
        assert!(slot.get().is_err());
    }

    #[test]
    fn test_exited_threads_are_purged_on_set() {
        let slot = Arc::new(ThreadScopedSlot::new());
        let value = Arc::new(0);

        for _ in 0..64 {
            let slot = Arc::clone(&slot);
            let value = Arc::clone(&value);
            thread::spawn(move || slot.set(value).unwrap())
                .join()
                .unwrap();
        }
        // Each set dropped the entry of the thread joined before it.
        assert_eq!(slot.len(), 1);

        slot.set(Arc::clone(&value)).unwrap();
        assert_eq!(slot.len(), 1);
        assert_eq!(Arc::strong_count(&value), 2);
    }

    #[test]
    fn test_purge_keeps_live_threads() {
        let slot = Arc::new(ThreadScopedSlot::new());
        slot.set(1).unwrap();

        let barrier = Arc::new(Barrier::new(2));
        let live = {
            let slot = Arc::clone(&slot);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                slot.set(2).unwrap();
                barrier.wait();
                barrier.wait();
                assert_eq!(slot.get().unwrap(), Some(2));
            })
        };
        barrier.wait();

        {
            let slot = Arc::clone(&slot);
            thread::spawn(move || slot.set(3).unwrap()).join().unwrap();
        }

        assert_eq!(slot.purge(), 1);
        assert_eq!(slot.len(), 2);
        assert_eq!(slot.get().unwrap(), Some(1));

        barrier.wait();
        live.join().unwrap();
        assert_eq!(slot.purge(), 1);
        assert_eq!(slot.len(), 1);
    }
}
