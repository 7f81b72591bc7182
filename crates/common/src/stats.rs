use crate::model::RuleGroup;
use crate::state::{RuleState, StateMap};

/// Number of rules (not alerts) per lifecycle state.
pub type StatsCount = StateMap<usize>;

impl StateMap<usize> {
    pub fn from_groups(groups: &[RuleGroup]) -> Self {
        let mut counts = Self::default();
        for rule in groups.iter().flat_map(|g| g.rules.iter()) {
            *counts.get_mut(rule.state) += 1;
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.firing + self.pending + self.inactive
    }

    /// Highest state with a non-zero count.
    pub fn worst(&self) -> Option<RuleState> {
        RuleState::ALL
            .into_iter()
            .rev()
            .find(|s| *self.get(*s) > 0)
    }
}
