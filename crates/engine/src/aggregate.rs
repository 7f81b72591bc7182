use rulescope_common::{Rule, RuleState};
use serde::Serialize;

/// Badge counts for one group header.
///
/// `firing` and `pending` count alerts, not rules. Inactive rules never
/// carry alerts, so only their presence is tracked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GroupCounts {
    pub firing: usize,
    pub pending: usize,
    pub has_inactive: bool,
}

pub fn aggregate<'a, I>(rules: I) -> GroupCounts
where
    I: IntoIterator<Item = &'a Rule>,
{
    rules
        .into_iter()
        .fold(GroupCounts::default(), |mut acc, rule| {
            match rule.state {
                RuleState::Firing => acc.firing += rule.alert_count(),
                RuleState::Pending => acc.pending += rule.alert_count(),
                RuleState::Inactive => acc.has_inactive = true,
            }
            acc
        })
}
