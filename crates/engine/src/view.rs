use rulescope_common::{Rule, RuleGroup, StatsCount};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::aggregate::{aggregate, GroupCounts};
use crate::filter::StateFilter;
use crate::fuzzy::FuzzyMatcher;

/// User-controlled inputs to a recompute.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    pub search: String,
    pub filter: StateFilter,
    pub show_annotations: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupView<'a> {
    #[serde(serialize_with = "group_header")]
    pub group: &'a RuleGroup,
    pub rendered_rules: Vec<&'a Rule>,
    pub counts: GroupCounts,
    pub matched_rules: usize,
}

impl GroupView<'_> {
    /// Search matches hidden by the state filter.
    pub fn hidden_rules(&self) -> usize {
        self.matched_rules - self.rendered_rules.len()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RulesView<'a> {
    pub groups: Vec<GroupView<'a>>,
    pub stats: StatsCount,
    pub search: String,
    pub filter: StateFilter,
    pub show_annotations: bool,
}

impl RulesView<'_> {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn rendered_rule_count(&self) -> usize {
        self.groups.iter().map(|g| g.rendered_rules.len()).sum()
    }
}

pub struct FilterEngine<'a> {
    groups: &'a [RuleGroup],
    stats: StatsCount,
}

impl<'a> FilterEngine<'a> {
    pub fn new(groups: &'a [RuleGroup], stats: StatsCount) -> Self {
        Self { groups, stats }
    }

    pub fn render(&self, state: &FilterState) -> RulesView<'a> {
        let matcher = FuzzyMatcher::new(&state.search);
        let mut groups = Vec::new();

        for group in self.groups {
            let candidates = matcher.filter_in_order(&group.rules);
            if candidates.is_empty() {
                continue;
            }

            let rendered_rules: Vec<&Rule> = candidates
                .iter()
                .copied()
                .filter(|r| state.filter.visible(r.state))
                .collect();
            if rendered_rules.is_empty() {
                continue;
            }

            groups.push(GroupView {
                group,
                counts: aggregate(candidates.iter().copied()),
                matched_rules: candidates.len(),
                rendered_rules,
            });
        }

        tracing::debug!(
            search = %state.search,
            visible_groups = groups.len(),
            total_groups = self.groups.len(),
            "view recomputed"
        );

        RulesView {
            groups,
            stats: self.stats,
            search: state.search.clone(),
            filter: state.filter,
            show_annotations: state.show_annotations,
        }
    }
}

fn group_header<S: Serializer>(group: &&RuleGroup, s: S) -> Result<S::Ok, S::Error> {
    let mut st = s.serialize_struct("RuleGroup", 3)?;
    st.serialize_field("name", &group.name)?;
    st.serialize_field("file", &group.file)?;
    st.serialize_field("interval", &group.interval)?;
    st.end()
}
