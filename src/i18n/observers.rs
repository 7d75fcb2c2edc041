// SPDX-License-Identifier: MPL-2.0
//! Identity-keyed set of locale observers.
//!
//! Observers are stored by the address of their `Arc` allocation, so
//! subscribing the same `Arc` twice keeps a single entry and unsubscribing
//! drops the registry's clone immediately.

use crate::application::port::LocaleObserver;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ObserverKey(usize);

impl ObserverKey {
    fn of(observer: &Arc<dyn LocaleObserver>) -> Self {
        Self(Arc::as_ptr(observer).cast::<()>() as usize)
    }
}

#[derive(Default)]
pub(crate) struct ObserverRegistry {
    observers: Mutex<HashMap<ObserverKey, Arc<dyn LocaleObserver>>>,
}

impl ObserverRegistry {
    /// Returns `true` when the observer was not registered yet.
    pub(crate) fn insert(&self, observer: Arc<dyn LocaleObserver>) -> bool {
        let key = ObserverKey::of(&observer);
        let mut observers = self.observers.lock();
        if observers.contains_key(&key) {
            return false;
        }
        observers.insert(key, observer);
        true
    }

    /// Returns `true` when an entry was removed.
    pub(crate) fn remove(&self, observer: &Arc<dyn LocaleObserver>) -> bool {
        self.observers
            .lock()
            .remove(&ObserverKey::of(observer))
            .is_some()
    }

    pub(crate) fn len(&self) -> usize {
        self.observers.lock().len()
    }

    /// Point-in-time copy of the registered observers.
    pub(crate) fn snapshot(&self) -> Vec<Arc<dyn LocaleObserver>> {
        self.observers.lock().values().cloned().collect()
    }

    /// Calls every observer from a snapshot.
    ///
    /// The registry lock is not held while callbacks run, so observers may
    /// subscribe or unsubscribe from inside `locale_changed`.
    pub(crate) fn notify_all(&self) {
        for observer in self.snapshot() {
            observer.locale_changed();
        }
    }
}

impl std::fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_observer() -> (Arc<dyn LocaleObserver>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let observer: Arc<dyn LocaleObserver> = Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (observer, calls)
    }

    #[test]
    fn insert_is_idempotent() {
        let registry = ObserverRegistry::default();
        let (observer, calls) = counting_observer();

        assert!(registry.insert(Arc::clone(&observer)));
        assert!(!registry.insert(Arc::clone(&observer)));
        assert_eq!(registry.len(), 1);

        registry.notify_all();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn distinct_allocations_are_distinct_observers() {
        let registry = ObserverRegistry::default();
        let (first, _) = counting_observer();
        let (second, _) = counting_observer();

        registry.insert(first);
        registry.insert(second);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn remove_unknown_observer_is_noop() {
        let registry = ObserverRegistry::default();
        let (observer, _) = counting_observer();
        assert!(!registry.remove(&observer));
    }

    #[test]
    fn remove_releases_registry_reference() {
        let registry = ObserverRegistry::default();
        let (observer, _) = counting_observer();

        registry.insert(Arc::clone(&observer));
        assert_eq!(Arc::strong_count(&observer), 2);

        assert!(registry.remove(&observer));
        assert_eq!(Arc::strong_count(&observer), 1);
    }

    #[test]
    fn observer_added_during_pass_waits_for_next_pass() {
        let registry = Arc::new(ObserverRegistry::default());
        let (late, late_calls) = counting_observer();

        let registry_in_callback = Arc::clone(&registry);
        let late_in_callback = Arc::clone(&late);
        let adder: Arc<dyn LocaleObserver> = Arc::new(move || {
            registry_in_callback.insert(Arc::clone(&late_in_callback));
        });
        registry.insert(adder);

        registry.notify_all();
        assert_eq!(late_calls.load(Ordering::SeqCst), 0);

        registry.notify_all();
        assert_eq!(late_calls.load(Ordering::SeqCst), 1);
    }
}
