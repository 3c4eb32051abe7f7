//! In-memory collection state shared by every list view.
//!
//! Each mounted list owns one `CollectionState` and reconciles it against the
//! backend's responses: a full load replaces the items, mutations patch the
//! collection optimistically from the returned row, and a failed load keeps
//! whatever was already on screen (stale-on-error). Refetching the whole
//! collection is reserved for realtime change events.

use crate::model::category::Category;
use crate::model::firm::PropFirm;
use crate::model::review::Review;

/// A record addressable by its server-assigned identifier.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for PropFirm {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Review {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Category {
    fn key(&self) -> &str {
        &self.id
    }
}

/// Items, loading flag, and the last load error for one collection.
///
/// Starts in the loading state so views render a spinner until the first
/// fetch resolves.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: None,
        }
    }
}

impl<T: Keyed> CollectionState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a refetch in flight without dropping the current items.
    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Applies the outcome of a full fetch. A failure keeps the previous
    /// items untouched and records the message for the view to surface.
    pub fn finish_load(&mut self, outcome: Result<Vec<T>, String>) {
        self.loading = false;
        match outcome {
            Ok(rows) => {
                self.items = rows;
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
    }

    /// Prepends a freshly inserted row (collections are ordered newest first).
    pub fn insert_front(&mut self, row: T) {
        self.items.insert(0, row);
    }

    /// Swaps the matching entry in place, preserving order. A row whose key
    /// is not present is ignored.
    pub fn replace(&mut self, row: T) {
        if let Some(slot) = self.items.iter_mut().find(|item| item.key() == row.key()) {
            *slot = row;
        }
    }

    /// Drops the entry with the given key. Returns `false` when nothing
    /// matched, so a repeated delete is a harmless no-op.
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.key() != key);
        self.items.len() != before
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.items.iter().find(|item| item.key() == key)
    }
}

/// Load state of a single-record view.
///
/// A failed fetch stays distinct from a fetch that found nothing: the former
/// surfaces the error message, only the latter renders a not-found view.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState<T> {
    Loading,
    Failed(String),
    Missing,
    Loaded(T),
}

impl<T> Default for DetailState<T> {
    fn default() -> Self {
        DetailState::Loading
    }
}

impl<T> DetailState<T> {
    /// Applies the outcome of a fetch-by-id.
    pub fn finish(outcome: Result<Option<T>, String>) -> Self {
        match outcome {
            Ok(Some(row)) => DetailState::Loaded(row),
            Ok(None) => DetailState::Missing,
            Err(message) => DetailState::Failed(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        price: f64,
    }

    impl Keyed for Row {
        fn key(&self) -> &str {
            &self.id
        }
    }

    fn row(id: &str, price: f64) -> Row {
        Row {
            id: id.to_string(),
            price,
        }
    }

    #[test]
    fn starts_loading_and_empty() {
        let state = CollectionState::<Row>::new();
        assert!(state.loading);
        assert!(state.items.is_empty());
        assert!(state.error.is_none());
    }

    #[test]
    fn successful_load_replaces_items_and_clears_error() {
        let mut state = CollectionState::new();
        state.finish_load(Err("network down".to_string()));
        state.begin_load();
        state.finish_load(Ok(vec![row("a", 100.0), row("b", 200.0)]));
        assert!(!state.loading);
        assert_eq!(state.items.len(), 2);
        assert!(state.error.is_none());
    }

    #[test]
    fn failed_load_keeps_previous_items() {
        let mut state = CollectionState::new();
        state.finish_load(Ok(vec![row("a", 100.0)]));
        state.begin_load();
        state.finish_load(Err("timeout".to_string()));
        assert_eq!(state.items, vec![row("a", 100.0)]);
        assert_eq!(state.error.as_deref(), Some("timeout"));
        assert!(!state.loading);
    }

    #[test]
    fn insert_front_grows_by_one_with_new_row_first() {
        let mut state = CollectionState::new();
        state.finish_load(Ok(vec![row("a", 100.0), row("b", 200.0)]));
        state.insert_front(row("c", 300.0));
        assert_eq!(state.items.len(), 3);
        assert_eq!(state.items[0].id, "c");
        assert_eq!(state.items[1].id, "a");
    }

    #[test]
    fn replace_patches_exactly_the_matching_row_in_place() {
        let mut state = CollectionState::new();
        state.finish_load(Ok(vec![row("a", 100.0), row("b", 200.0), row("c", 300.0)]));
        state.replace(row("b", 50.0));
        assert_eq!(state.items[0], row("a", 100.0));
        assert_eq!(state.items[1], row("b", 50.0));
        assert_eq!(state.items[2], row("c", 300.0));
    }

    #[test]
    fn replace_of_unknown_key_changes_nothing() {
        let mut state = CollectionState::new();
        state.finish_load(Ok(vec![row("a", 100.0)]));
        state.replace(row("zzz", 1.0));
        assert_eq!(state.items, vec![row("a", 100.0)]);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut state = CollectionState::new();
        state.finish_load(Ok(vec![row("a", 100.0), row("b", 200.0)]));
        assert!(state.remove("a"));
        assert!(state.get("a").is_none());
        assert_eq!(state.items.len(), 1);
        // second delete finds nothing to remove
        assert!(!state.remove("a"));
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn detail_fetch_failure_is_not_reported_as_missing() {
        let state = DetailState::<Row>::finish(Err("network down".to_string()));
        assert_eq!(state, DetailState::Failed("network down".to_string()));
        assert_ne!(state, DetailState::Missing);
    }

    #[test]
    fn detail_empty_result_is_missing() {
        assert_eq!(DetailState::<Row>::finish(Ok(None)), DetailState::Missing);
    }

    #[test]
    fn detail_found_row_is_loaded() {
        let state = DetailState::finish(Ok(Some(row("a", 100.0))));
        assert_eq!(state, DetailState::Loaded(row("a", 100.0)));
    }
}
