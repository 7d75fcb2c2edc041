// SPDX-License-Identifier: MPL-2.0
//! Locale change observer port.
//!
//! Anything that needs to refresh itself when the active locale changes
//! implements [`LocaleObserver`]. Plain closures qualify through the blanket
//! implementation, so most callers never write an explicit impl.

/// Callback invoked once per successful locale change.
///
/// The callback receives no arguments; observers read the new state back from
/// the localization service they subscribed to.
pub trait LocaleObserver: Send + Sync {
    fn locale_changed(&self);
}

impl<F> LocaleObserver for F
where
    F: Fn() + Send + Sync,
{
    fn locale_changed(&self) {
        self();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn closures_are_observers() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let observer: Arc<dyn LocaleObserver> = Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        observer.locale_changed();
        observer.locale_changed();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
