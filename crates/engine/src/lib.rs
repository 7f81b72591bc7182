//! Filtering and aggregation of alerting-rule groups for display.
//!
//! [`FilterEngine`] narrows groups by fuzzy rule-name search and by
//! lifecycle state, and recomputes per-group badge counts. [`Preferences`]
//! persists the user's filter choices through an injected
//! [`PreferenceStore`].

pub mod aggregate;
pub mod filter;
pub mod fuzzy;
pub mod prefs;
pub mod view;

pub use aggregate::{aggregate, GroupCounts};
pub use filter::StateFilter;
pub use fuzzy::{FuzzyMatcher, Match, Named, Tier};
pub use prefs::{FileStore, MemoryStore, PreferenceStore, Preferences, StoreError};
pub use view::{FilterEngine, FilterState, GroupView, RulesView};
