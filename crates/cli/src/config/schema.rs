use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct CliConfig {
    /// Rules API URL or path to a saved payload.
    pub source: String,
    #[serde(default)]
    pub prefs_path: Option<String>,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct DisplayConfig {
    #[serde(default = "default_max_alerts")]
    pub max_alerts_per_rule: usize,
    #[serde(default = "yes")]
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_alerts_per_rule: default_max_alerts(),
            color: true,
        }
    }
}

fn default_timeout() -> u64 {
    10
}

fn default_max_alerts() -> usize {
    20
}

fn yes() -> bool {
    true
}
