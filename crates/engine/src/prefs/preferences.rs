use rulescope_common::RuleState;

use super::store::{get, set, PreferenceStore};
use crate::filter::StateFilter;
use crate::view::FilterState;

pub const STATE_FILTER_KEY: &str = "alerts.state-filter";
pub const SEARCH_KEY: &str = "alerts.search";
pub const ANNOTATIONS_KEY: &str = "alerts.show-annotations";

/// Typed access to the three persisted view preferences.
///
/// Every mutation computes the new value first and then persists it; the
/// returned value is correct for the current session even when the write
/// fails.
pub struct Preferences<S> {
    store: S,
}

impl<S: PreferenceStore> Preferences<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn state_filter(&self) -> StateFilter {
        get(&self.store, STATE_FILTER_KEY, StateFilter::default())
    }

    pub fn set_state_filter(&self, filter: StateFilter) {
        set(&self.store, STATE_FILTER_KEY, &filter);
    }

    pub fn toggle_state(&self, state: RuleState) -> StateFilter {
        let next = self.state_filter().toggle(state);
        self.set_state_filter(next);
        tracing::debug!(%state, visible = next.visible(state), "state filter toggled");
        next
    }

    pub fn search(&self) -> String {
        get(&self.store, SEARCH_KEY, String::new())
    }

    pub fn set_search(&self, text: &str) {
        set(&self.store, SEARCH_KEY, &text);
    }

    pub fn show_annotations(&self) -> bool {
        get(&self.store, ANNOTATIONS_KEY, false)
    }

    pub fn set_show_annotations(&self, on: bool) {
        set(&self.store, ANNOTATIONS_KEY, &on);
    }

    pub fn toggle_annotations(&self) -> bool {
        let next = !self.show_annotations();
        self.set_show_annotations(next);
        next
    }

    pub fn load(&self) -> FilterState {
        FilterState {
            search: self.search(),
            filter: self.state_filter(),
            show_annotations: self.show_annotations(),
        }
    }

    pub fn save(&self, state: &FilterState) {
        self.set_search(&state.search);
        self.set_state_filter(state.filter);
        self.set_show_annotations(state.show_annotations);
    }

    /// Drops all three keys so the next read sees the defaults.
    pub fn reset(&self) {
        for key in [STATE_FILTER_KEY, SEARCH_KEY, ANNOTATIONS_KEY] {
            if let Err(e) = self.store.delete(key) {
                tracing::warn!(key, error = %e, "preference reset failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::memory::MemoryStore;
    use crate::prefs::store::StoreError;
    use serde_json::Value;

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn load(&self, _key: &str) -> Result<Option<Value>, StoreError> {
            Err(StoreError::Unavailable("offline".into()))
        }

        fn save(&self, _key: &str, _value: Value) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("offline".into()))
        }

        fn delete(&self, _key: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("offline".into()))
        }
    }

    #[test]
    fn defaults_on_first_use() {
        let prefs = Preferences::new(MemoryStore::new());
        assert_eq!(prefs.load(), FilterState::default());
        assert_eq!(prefs.state_filter(), StateFilter::new(true, true, true));
        assert_eq!(prefs.search(), "");
        assert!(!prefs.show_annotations());
    }

    #[test]
    fn toggle_state_persists() {
        let store = MemoryStore::new();
        let prefs = Preferences::new(store.clone());
        let next = prefs.toggle_state(RuleState::Inactive);
        assert!(!next.visible(RuleState::Inactive));

        let again = Preferences::new(store);
        assert_eq!(again.state_filter(), next);
    }

    #[test]
    fn toggle_state_twice_restores() {
        let prefs = Preferences::new(MemoryStore::new());
        prefs.toggle_state(RuleState::Firing);
        prefs.toggle_state(RuleState::Firing);
        assert_eq!(prefs.state_filter(), StateFilter::default());
    }

    #[test]
    fn search_and_annotations_persist() {
        let prefs = Preferences::new(MemoryStore::new());
        prefs.set_search("disk");
        assert!(prefs.toggle_annotations());
        let state = prefs.load();
        assert_eq!(state.search, "disk");
        assert!(state.show_annotations);
    }

    #[test]
    fn reset_restores_defaults() {
        let prefs = Preferences::new(MemoryStore::new());
        prefs.save(&FilterState {
            search: "x".into(),
            filter: StateFilter::only(RuleState::Pending),
            show_annotations: true,
        });
        prefs.reset();
        assert_eq!(prefs.load(), FilterState::default());
        assert!(prefs.store().is_empty());
    }

    #[test]
    fn broken_store_falls_back_to_defaults() {
        let prefs = Preferences::new(BrokenStore);
        assert_eq!(prefs.load(), FilterState::default());
    }

    #[test]
    fn broken_store_still_returns_new_value() {
        let prefs = Preferences::new(BrokenStore);
        let next = prefs.toggle_state(RuleState::Pending);
        assert!(!next.visible(RuleState::Pending));
        assert!(prefs.toggle_annotations());
        prefs.reset();
    }
}
