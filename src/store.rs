// =============================================================================
// EduSphere Web - Shared Counter Store
// =============================================================================
// Observable state cell shared by any number of components.
// Instantiated explicitly (usually inside AppState) - there is no global.
// =============================================================================

use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

use parking_lot::Mutex;

// -----------------------------------------------------------------------------
// Subscriber Handle
// -----------------------------------------------------------------------------

/// Handle returned by [`CounterStore::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Subscriber = Box<dyn Fn(i64) + Send + Sync>;

// -----------------------------------------------------------------------------
// Counter Store
// -----------------------------------------------------------------------------

/// An observable integer counter.
///
/// Every mutation moves the count by exactly +1 or -1 and then notifies each
/// registered subscriber once with the new value. Mutations are never
/// batched. The count is unbounded and may go negative.
///
/// The browser runs this on a single thread, but the count is atomic and the
/// subscriber list is behind a mutex so the store can live in `Arc`-shared,
/// `Send + Sync` contexts (Leptos callbacks and signals require it).
/// Callbacks run while the subscriber list is locked, so a callback must not
/// subscribe or unsubscribe.
pub struct CounterStore {
    count: AtomicI64,
    next_id: AtomicU64,
    subscribers: Mutex<Vec<(SubscriberId, Subscriber)>>,
}

impl CounterStore {
    /// Create a new store with the count at zero and no subscribers.
    pub fn new() -> Self {
        Self {
            count: AtomicI64::new(0),
            next_id: AtomicU64::new(0),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Current count. No side effects.
    pub fn get(&self) -> i64 {
        self.count.load(Ordering::SeqCst)
    }

    /// Increase the count by one and notify subscribers.
    pub fn increment(&self) {
        let value = self.count.fetch_add(1, Ordering::SeqCst) + 1;
        self.notify(value);
    }

    /// Decrease the count by one and notify subscribers.
    pub fn decrement(&self) {
        let value = self.count.fetch_sub(1, Ordering::SeqCst) - 1;
        self.notify(value);
    }

    /// Register an observer called after every mutation with the new count.
    ///
    /// Observers see only mutations that happen after registration; there is
    /// no replay of past changes. Notification order across subscribers is
    /// not a contract.
    pub fn subscribe(&self, callback: impl Fn(i64) + Send + Sync + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_id.fetch_add(1, Ordering::SeqCst));
        self.subscribers.lock().push((id, Box::new(callback)));
        id
    }

    /// Remove an observer. Unknown ids are ignored.
    pub fn unsubscribe(&self, id: SubscriberId) {
        self.subscribers.lock().retain(|(sid, _)| *sid != id);
    }

    fn notify(&self, value: i64) {
        for (_, callback) in self.subscribers.lock().iter() {
            callback(value);
        }
    }
}

impl Default for CounterStore {
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_count_is_algebraic_sum() {
        let store = CounterStore::new();
        assert_eq!(store.get(), 0);

        store.increment();
        store.increment();
        store.decrement();
        assert_eq!(store.get(), 1);

        // May go negative, no bounds
        store.decrement();
        store.decrement();
        store.decrement();
        assert_eq!(store.get(), -2);
    }

    #[test]
    fn test_each_mutation_notifies_once() {
        let store = CounterStore::new();
        let seen: Arc<Mutex<Vec<i64>>> = Arc::new(Mutex::new(Vec::new()));

        let sink = seen.clone();
        store.subscribe(move |v| sink.lock().push(v));

        store.increment();
        store.increment();
        store.decrement();

        assert_eq!(*seen.lock(), vec![1, 2, 1]);
    }

    #[test]
    fn test_late_subscriber_misses_prior_mutations() {
        let store = CounterStore::new();

        // k mutations before anyone is listening
        store.increment();
        store.increment();
        store.decrement();

        let seen: Arc<Mutex<Vec<i64>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        store.subscribe(move |v| sink.lock().push(v));

        store.increment();

        // Exactly one notification, for the one mutation after subscribing
        assert_eq!(*seen.lock(), vec![2]);
    }

    #[test]
    fn test_multiple_subscribers_all_notified() {
        let store = CounterStore::new();
        let a = Arc::new(AtomicI64::new(0));
        let b = Arc::new(AtomicI64::new(0));

        let a_sink = a.clone();
        store.subscribe(move |v| a_sink.store(v, Ordering::SeqCst));
        let b_sink = b.clone();
        store.subscribe(move |v| b_sink.store(v, Ordering::SeqCst));

        store.increment();
        assert_eq!(a.load(Ordering::SeqCst), 1);
        assert_eq!(b.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unsubscribe_stops_notifications() {
        let store = CounterStore::new();
        let calls = Arc::new(AtomicU64::new(0));

        let sink = calls.clone();
        let id = store.subscribe(move |_| {
            sink.fetch_add(1, Ordering::SeqCst);
        });

        store.increment();
        store.unsubscribe(id);
        store.increment();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        // Count still tracks mutations after the observer left
        assert_eq!(store.get(), 2);

        // Unknown id is a no-op
        store.unsubscribe(id);
    }

    #[test]
    fn test_independent_instances() {
        let a = CounterStore::new();
        let b = CounterStore::new();

        a.increment();
        a.increment();
        b.decrement();

        assert_eq!(a.get(), 2);
        assert_eq!(b.get(), -1);
    }
}
