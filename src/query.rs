// =============================================================================
// EduSphere Web - URL Query Field Binding
// =============================================================================
// The URL query string is the source of truth for named UI fields; everything
// here is a projection over it. Parsing/serialization is pure and testable;
// the browser is reached only through the QueryBackend adapter.
//
// Table of Contents:
// 1. Query String Helpers
// 2. Backend Adapter
// 3. Browser Backend
// 4. Reactive UrlQuery
// =============================================================================

use std::sync::Arc;

use leptos::prelude::*;
use thiserror::Error;

// -----------------------------------------------------------------------------
// 1. Query String Helpers
// -----------------------------------------------------------------------------

/// Percent-encode a `key=value` pair. Spaces become `%20`; `+` stays literal.
fn encode_pair(name: &str, value: &str) -> String {
    format!("{}={}", urlencoding::encode(name), urlencoding::encode(value))
}

/// Strict percent-decoding. Returns `None` on a truncated or non-hex escape
/// or when the decoded bytes are not UTF-8. (`urlencoding::decode` passes
/// bad escapes through literally, which would leak `%zz` into field values.)
fn decode_component(raw: &str) -> Option<String> {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hi = hex_digit(*bytes.get(i + 1)?)?;
            let lo = hex_digit(*bytes.get(i + 2)?)?;
            out.push((hi << 4) | lo);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}

fn hex_digit(byte: u8) -> Option<u8> {
    (byte as char).to_digit(16).map(|d| d as u8)
}

/// Decode one raw `key=value` pair. A key without `=` has an empty value.
/// Returns `None` when either side holds a malformed percent-escape.
fn decode_pair(raw: &str) -> Option<(String, String)> {
    let mut parts = raw.splitn(2, '=');
    let key = decode_component(parts.next()?)?;
    let value = decode_component(parts.next().unwrap_or(""))?;
    Some((key, value))
}

/// Look up `name` in a raw query string (no leading `?`).
///
/// Malformed pairs read as absent rather than erroring - URLs are
/// user-editable input. The first occurrence of a duplicated key wins.
pub fn read_param(query: &str, name: &str) -> Option<String> {
    query
        .split('&')
        .filter(|raw| !raw.is_empty())
        .filter_map(decode_pair)
        .find(|(key, _)| key == name)
        .map(|(_, value)| value)
}

/// Set, overwrite, or (with `None`) remove `name` in a raw query string.
///
/// Returns the new query string, or `None` when the write changes nothing
/// (the decoded value already matches, or the key was absent anyway). Other
/// pairs are carried over untouched, malformed ones included.
pub fn write_param(query: &str, name: &str, value: Option<&str>) -> Option<String> {
    let mut out: Vec<String> = Vec::new();
    let mut found = false;
    let mut changed = false;

    for raw in query.split('&').filter(|raw| !raw.is_empty()) {
        match decode_pair(raw) {
            Some((key, existing)) if key == name => {
                if found {
                    // Collapse duplicates beyond the first occurrence
                    changed = true;
                    continue;
                }
                found = true;
                match value {
                    Some(new) if new == existing => out.push(raw.to_string()),
                    Some(new) => {
                        out.push(encode_pair(name, new));
                        changed = true;
                    }
                    None => changed = true,
                }
            }
            _ => out.push(raw.to_string()),
        }
    }

    if !found {
        if let Some(new) = value {
            out.push(encode_pair(name, new));
            changed = true;
        }
    }

    changed.then(|| out.join("&"))
}

// -----------------------------------------------------------------------------
// 2. Backend Adapter
// -----------------------------------------------------------------------------

/// Error raised when the navigation layer refuses a query-string update.
#[derive(Debug, Error)]
pub enum QueryCommitError {
    #[error("browser rejected history update: {0}")]
    Rejected(String),
}

/// Storage adapter for the query string, so the binding logic stays testable
/// without a real navigation stack.
pub trait QueryBackend {
    /// Current raw query string, without the leading `?`.
    fn query(&self) -> String;

    /// Replace the query string, leaving the rest of the URL alone.
    fn commit(&self, query: &str) -> Result<(), QueryCommitError>;
}

/// Apply a single field write through a backend.
///
/// Returns whether a commit happened. Same-value writes (and removals of
/// absent keys) never reach the backend, so no redundant history entry can
/// be produced.
fn apply_write(
    backend: &dyn QueryBackend,
    name: &str,
    value: Option<&str>,
) -> Result<bool, QueryCommitError> {
    match write_param(&backend.query(), name, value) {
        Some(next) => {
            backend.commit(&next)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

// -----------------------------------------------------------------------------
// 3. Browser Backend
// -----------------------------------------------------------------------------

/// Query backend over `window.location` / `window.history`.
///
/// Commits use `history.replaceState`, so the URL updates in place without a
/// page reload and without growing the session history.
pub struct BrowserQuery;

impl BrowserQuery {
    fn window() -> web_sys::Window {
        web_sys::window().expect("No window object available")
    }
}

impl QueryBackend for BrowserQuery {
    fn query(&self) -> String {
        Self::window()
            .location()
            .search()
            .map(|s| s.trim_start_matches('?').to_string())
            .unwrap_or_default()
    }

    fn commit(&self, query: &str) -> Result<(), QueryCommitError> {
        let window = Self::window();
        let pathname = window
            .location()
            .pathname()
            .unwrap_or_else(|_| "/".to_string());
        let url = if query.is_empty() {
            pathname
        } else {
            format!("{pathname}?{query}")
        };

        let history = window
            .history()
            .map_err(|e| QueryCommitError::Rejected(format!("{e:?}")))?;
        history
            .replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&url))
            .map_err(|e| QueryCommitError::Rejected(format!("{e:?}")))
    }
}

// -----------------------------------------------------------------------------
// 4. Reactive UrlQuery
// -----------------------------------------------------------------------------

/// Reactive front over a [`QueryBackend`], provided app-wide via `AppState`.
///
/// A revision signal ties readers to writes: `read` tracks it, `write` bumps
/// it after a successful commit, so every component bound to a field
/// re-reads. Commits here are synchronous - a read immediately after a write
/// sees the new value.
#[derive(Clone)]
pub struct UrlQuery {
    backend: Arc<dyn QueryBackend + Send + Sync>,
    revision: RwSignal<u64>,
}

impl UrlQuery {
    pub fn new(backend: Arc<dyn QueryBackend + Send + Sync>) -> Self {
        Self {
            backend,
            revision: RwSignal::new(0),
        }
    }

    /// Backed by the real browser history.
    pub fn browser() -> Self {
        Self::new(Arc::new(BrowserQuery))
    }

    /// Current value of `name`, or `None` when absent. Reactive.
    pub fn read(&self, name: &str) -> Option<String> {
        self.revision.track();
        read_param(&self.backend.query(), name)
    }

    /// Set (`Some`) or remove (`None`) the field `name`.
    ///
    /// A rejected commit is logged and leaves readers on the previous
    /// committed value.
    pub fn write(&self, name: &str, value: Option<&str>) {
        match apply_write(self.backend.as_ref(), name, value) {
            Ok(true) => self.revision.update(|r| *r += 1),
            Ok(false) => {}
            Err(e) => log::warn!("query write for '{name}' not committed: {e}"),
        }
    }
}

// -----------------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// In-memory backend with a commit counter, standing in for the browser.
    struct MemoryQuery {
        query: RefCell<String>,
        commits: Cell<u32>,
    }

    impl MemoryQuery {
        fn new(initial: &str) -> Self {
            Self {
                query: RefCell::new(initial.to_string()),
                commits: Cell::new(0),
            }
        }
    }

    impl QueryBackend for MemoryQuery {
        fn query(&self) -> String {
            self.query.borrow().clone()
        }

        fn commit(&self, query: &str) -> Result<(), QueryCommitError> {
            *self.query.borrow_mut() = query.to_string();
            self.commits.set(self.commits.get() + 1);
            Ok(())
        }
    }

    fn read(backend: &MemoryQuery, name: &str) -> Option<String> {
        read_param(&backend.query(), name)
    }

    #[test]
    fn test_write_then_read() {
        let backend = MemoryQuery::new("");
        apply_write(&backend, "name", Some("Ada")).unwrap();
        assert_eq!(read(&backend, "name").as_deref(), Some("Ada"));
    }

    #[test]
    fn test_remove_clears_key_from_query() {
        let backend = MemoryQuery::new("name=Ada&filter=rust");
        apply_write(&backend, "name", None).unwrap();

        assert_eq!(read(&backend, "name"), None);
        assert!(!backend.query().contains("name"));
        assert_eq!(backend.query(), "filter=rust");
    }

    #[test]
    fn test_reserved_characters_round_trip() {
        let backend = MemoryQuery::new("");
        apply_write(&backend, "name", Some("a b&c")).unwrap();

        assert_eq!(read(&backend, "name").as_deref(), Some("a b&c"));
        // The raw representation stays a single well-formed pair
        assert_eq!(backend.query(), "name=a%20b%26c");
    }

    #[test]
    fn test_named_fields_are_independent() {
        let backend = MemoryQuery::new("");
        apply_write(&backend, "name", Some("Ada")).unwrap();
        apply_write(&backend, "filter", Some("rust")).unwrap();
        apply_write(&backend, "name", Some("Grace")).unwrap();

        assert_eq!(read(&backend, "name").as_deref(), Some("Grace"));
        assert_eq!(read(&backend, "filter").as_deref(), Some("rust"));
    }

    #[test]
    fn test_same_value_write_commits_nothing() {
        let backend = MemoryQuery::new("name=Ada");

        let committed = apply_write(&backend, "name", Some("Ada")).unwrap();
        assert!(!committed);
        assert_eq!(backend.commits.get(), 0);

        // Removing an absent key is also a no-op
        let committed = apply_write(&backend, "missing", None).unwrap();
        assert!(!committed);
        assert_eq!(backend.commits.get(), 0);

        let committed = apply_write(&backend, "name", Some("Grace")).unwrap();
        assert!(committed);
        assert_eq!(backend.commits.get(), 1);
    }

    #[test]
    fn test_malformed_escape_reads_as_absent() {
        // %zz is not a valid percent-escape; the pair degrades to absent
        assert_eq!(read_param("name=%zz", "name"), None);
        // Truncated escape and invalid UTF-8 likewise
        assert_eq!(read_param("name=%4", "name"), None);
        assert_eq!(read_param("name=%ff", "name"), None);

        // ...without disturbing well-formed neighbors
        let backend = MemoryQuery::new("name=%zz&filter=rust");
        assert_eq!(read(&backend, "filter").as_deref(), Some("rust"));

        // A write elsewhere carries the malformed pair over untouched
        apply_write(&backend, "filter", Some("wasm")).unwrap();
        assert!(backend.query().contains("name=%zz"));
    }

    #[test]
    fn test_duplicate_keys_first_wins() {
        assert_eq!(
            read_param("name=Ada&name=Grace", "name").as_deref(),
            Some("Ada")
        );

        // Writing collapses the duplicates to a single pair
        let backend = MemoryQuery::new("name=Ada&name=Grace");
        apply_write(&backend, "name", Some("Katherine")).unwrap();
        assert_eq!(backend.query(), "name=Katherine");
    }

    #[test]
    fn test_empty_and_valueless_pairs() {
        // A key without '=' reads as present with an empty value
        assert_eq!(read_param("flag", "flag").as_deref(), Some(""));
        assert_eq!(read_param("flag=", "flag").as_deref(), Some(""));

        // Empty query, empty segments
        assert_eq!(read_param("", "name"), None);
        assert_eq!(read_param("&&", "name"), None);
    }

    #[test]
    fn test_plus_is_literal() {
        let backend = MemoryQuery::new("");
        apply_write(&backend, "q", Some("c++")).unwrap();
        assert_eq!(read(&backend, "q").as_deref(), Some("c++"));
    }
}
