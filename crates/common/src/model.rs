use serde::Serialize;
use std::collections::BTreeMap;

use crate::state::RuleState;

pub type Labels = BTreeMap<String, String>;

/// One pending or firing instance of a rule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alert {
    pub labels: Labels,
    pub state: RuleState,
    pub value: String,
    pub annotations: Labels,
    pub active_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    pub name: String,
    pub state: RuleState,
    pub query: String,
    /// `for` duration in seconds.
    pub duration: f64,
    pub labels: Labels,
    pub annotations: Labels,
    pub alerts: Vec<Alert>,
    pub health: String,
    pub last_error: Option<String>,
}

impl Rule {
    pub fn new(name: impl Into<String>, state: RuleState) -> Self {
        Self {
            name: name.into(),
            state,
            query: String::new(),
            duration: 0.0,
            labels: Labels::new(),
            annotations: Labels::new(),
            alerts: Vec::new(),
            health: String::new(),
            last_error: None,
        }
    }

    pub fn with_alerts(mut self, alerts: Vec<Alert>) -> Self {
        self.alerts = alerts;
        self
    }

    pub fn alert_count(&self) -> usize {
        self.alerts.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleGroup {
    pub name: String,
    pub file: String,
    /// Evaluation interval in seconds.
    pub interval: f64,
    pub rules: Vec<Rule>,
}

impl RuleGroup {
    pub fn new(name: impl Into<String>, file: impl Into<String>, rules: Vec<Rule>) -> Self {
        Self {
            name: name.into(),
            file: file.into(),
            interval: 0.0,
            rules,
        }
    }
}

impl Alert {
    pub fn new(state: RuleState) -> Self {
        Self {
            labels: Labels::new(),
            state,
            value: String::new(),
            annotations: Labels::new(),
            active_at: String::new(),
        }
    }

    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }
}
