use rulescope_common::{RuleState, StateMap};
use serde::{Deserialize, Serialize};

/// Which lifecycle states are currently shown.
///
/// Values are immutable: every change returns a new filter, so the caller
/// can compare old and new before persisting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PersistedFilter", into = "PersistedFilter")]
pub struct StateFilter(StateMap<bool>);

impl Default for StateFilter {
    fn default() -> Self {
        Self(StateMap::splat(true))
    }
}

impl StateFilter {
    pub fn new(firing: bool, pending: bool, inactive: bool) -> Self {
        Self(StateMap::new(firing, pending, inactive))
    }

    pub fn visible(&self, state: RuleState) -> bool {
        *self.0.get(state)
    }

    #[must_use]
    pub fn toggle(&self, state: RuleState) -> Self {
        self.with(state, !self.visible(state))
    }

    #[must_use]
    pub fn with(&self, state: RuleState, visible: bool) -> Self {
        Self(self.0.with(state, visible))
    }

    pub fn only(state: RuleState) -> Self {
        Self(StateMap::splat(false).with(state, true))
    }

    pub fn any_visible(&self) -> bool {
        self.0.iter().any(|(_, v)| *v)
    }

    pub fn visible_states(&self) -> Vec<RuleState> {
        self.0.iter().filter(|(_, v)| **v).map(|(s, _)| s).collect()
    }
}

// Keys missing from a stored filter default to visible, so a filter saved
// before a state existed never hides that state.
#[derive(Clone, Copy, Serialize, Deserialize)]
struct PersistedFilter {
    #[serde(default = "visible")]
    firing: bool,
    #[serde(default = "visible")]
    pending: bool,
    #[serde(default = "visible")]
    inactive: bool,
}

fn visible() -> bool {
    true
}

impl From<PersistedFilter> for StateFilter {
    fn from(p: PersistedFilter) -> Self {
        Self::new(p.firing, p.pending, p.inactive)
    }
}

impl From<StateFilter> for PersistedFilter {
    fn from(f: StateFilter) -> Self {
        Self {
            firing: f.0.firing,
            pending: f.0.pending,
            inactive: f.0.inactive,
        }
    }
}
