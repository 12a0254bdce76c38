// =============================================================================
// EduSphere Web - Global Application State
// =============================================================================
// Table of Contents:
// 1. Persisted Preferences
// 2. App State
// 3. Preference Actions
// =============================================================================

use std::sync::Arc;

use gloo_storage::Storage;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::query::UrlQuery;
use crate::store::CounterStore;

// -----------------------------------------------------------------------------
// 1. Persisted Preferences
// -----------------------------------------------------------------------------

/// UI preferences persisted to localStorage.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Prefs {
    pub dark_mode: bool,
}

const PREFS_KEY: &str = "edusphere_prefs";

// -----------------------------------------------------------------------------
// 2. App State
// -----------------------------------------------------------------------------

/// Global application state provided via Leptos context.
///
/// Built once in `App`; tests construct their own instances instead of
/// sharing hidden globals.
#[derive(Clone)]
pub struct AppState {
    /// Shared counter store. Components mutate through its API.
    pub counter: Arc<CounterStore>,

    /// Reactive mirror of the counter, fed by a store subscription.
    pub count: RwSignal<i64>,

    /// URL-query-string field bindings.
    pub query: UrlQuery,

    /// Whether the app is in dark mode.
    pub dark_mode: RwSignal<bool>,
}

impl AppState {
    /// Create app state backed by the real browser navigation layer.
    pub fn new() -> Self {
        Self::with_query(UrlQuery::browser())
    }

    /// Create app state with an explicit query binding (injectable for
    /// non-browser harnesses).
    pub fn with_query(query: UrlQuery) -> Self {
        let counter = Arc::new(CounterStore::new());
        let count = RwSignal::new(counter.get());

        // Keep the signal in lockstep with the store so views tracking
        // `count` re-render on every mutation.
        let mirror = count;
        counter.subscribe(move |value| mirror.set(value));

        // Check localStorage for saved preferences
        let prefs: Prefs = gloo_storage::LocalStorage::get(PREFS_KEY).unwrap_or_default();

        Self {
            counter,
            count,
            query,
            dark_mode: RwSignal::new(prefs.dark_mode),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// 3. Preference Actions
// -----------------------------------------------------------------------------

impl AppState {
    /// Toggle dark mode and persist preference.
    pub fn toggle_dark_mode(&self) {
        let new_value = !self.dark_mode.get();
        self.dark_mode.set(new_value);
        let prefs = Prefs {
            dark_mode: new_value,
        };
        let _ = gloo_storage::LocalStorage::set(PREFS_KEY, prefs);
    }
}
