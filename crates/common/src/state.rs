use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of an alerting rule as reported by the evaluator.
///
/// Variants are declared in ascending severity so the derived `Ord`
/// gives `Inactive < Pending < Firing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleState {
    Inactive,
    Pending,
    Firing,
}

impl RuleState {
    pub const ALL: [RuleState; 3] = [Self::Inactive, Self::Pending, Self::Firing];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inactive => "inactive",
            Self::Pending => "pending",
            Self::Firing => "firing",
        }
    }
}

impl fmt::Display for RuleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStateError(pub String);

impl fmt::Display for ParseStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown rule state: {:?}", self.0)
    }
}

impl std::error::Error for ParseStateError {}

impl FromStr for RuleState {
    type Err = ParseStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inactive" => Ok(Self::Inactive),
            "pending" => Ok(Self::Pending),
            "firing" => Ok(Self::Firing),
            _ => Err(ParseStateError(s.to_string())),
        }
    }
}

/// Total mapping from every [`RuleState`] to a value. There is no way to
/// build a partial map, so lookups never miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StateMap<T> {
    #[serde(default)]
    pub firing: T,
    #[serde(default)]
    pub pending: T,
    #[serde(default)]
    pub inactive: T,
}

impl<T> StateMap<T> {
    pub fn new(firing: T, pending: T, inactive: T) -> Self {
        Self {
            firing,
            pending,
            inactive,
        }
    }

    pub fn get(&self, state: RuleState) -> &T {
        match state {
            RuleState::Firing => &self.firing,
            RuleState::Pending => &self.pending,
            RuleState::Inactive => &self.inactive,
        }
    }

    pub fn get_mut(&mut self, state: RuleState) -> &mut T {
        match state {
            RuleState::Firing => &mut self.firing,
            RuleState::Pending => &mut self.pending,
            RuleState::Inactive => &mut self.inactive,
        }
    }

    /// Entries in display order (inactive, pending, firing).
    pub fn iter(&self) -> impl Iterator<Item = (RuleState, &T)> {
        RuleState::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}

impl<T: Clone> StateMap<T> {
    pub fn splat(value: T) -> Self {
        Self::new(value.clone(), value.clone(), value)
    }

    /// Copy of `self` with one entry replaced.
    pub fn with(&self, state: RuleState, value: T) -> Self {
        let mut next = self.clone();
        *next.get_mut(state) = value;
        next
    }
}
