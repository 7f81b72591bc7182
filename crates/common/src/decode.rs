//! Decoding of rule-group payloads.
//!
//! Accepts the Prometheus-compatible rules API envelope
//! (`{"status":"success","data":{"groups":[...]}}`), a bare
//! `{"groups":[...]}` object, or a top-level array of groups. Decoding is
//! lenient below the top level: missing or null collections become empty,
//! and rules or alerts that cannot be understood are skipped and counted
//! in the [`DecodeReport`] instead of failing the whole payload.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

use crate::model::{Alert, Labels, Rule, RuleGroup};
use crate::state::RuleState;

#[derive(Debug)]
pub enum DecodeError {
    Json(serde_json::Error),
    Api(String),
    Shape(String),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(e) => write!(f, "json: {e}"),
            Self::Api(msg) => write!(f, "api error: {msg}"),
            Self::Shape(msg) => write!(f, "unexpected payload: {msg}"),
        }
    }
}

impl std::error::Error for DecodeError {}

impl From<serde_json::Error> for DecodeError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeReport {
    pub skipped_groups: usize,
    pub skipped_rules: usize,
    pub skipped_alerts: usize,
    pub recording_rules: usize,
}

impl DecodeReport {
    pub fn is_clean(&self) -> bool {
        self.skipped_groups == 0 && self.skipped_rules == 0 && self.skipped_alerts == 0
    }
}

#[derive(Debug, Clone)]
pub struct Decoded {
    pub groups: Vec<RuleGroup>,
    pub report: DecodeReport,
}

#[derive(Deserialize)]
struct RawGroup {
    #[serde(default, deserialize_with = "lenient_string")]
    name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    file: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    interval: f64,
    #[serde(default, deserialize_with = "lenient_list")]
    rules: Vec<Value>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRule {
    #[serde(default, deserialize_with = "lenient_string")]
    name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    state: String,
    #[serde(default, rename = "type", deserialize_with = "lenient_string")]
    kind: String,
    #[serde(default, deserialize_with = "lenient_string")]
    query: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    duration: f64,
    #[serde(default, deserialize_with = "lenient_labels")]
    labels: Labels,
    #[serde(default, deserialize_with = "lenient_labels")]
    annotations: Labels,
    #[serde(default, deserialize_with = "lenient_list")]
    alerts: Vec<Value>,
    #[serde(default, deserialize_with = "lenient_string")]
    health: String,
    #[serde(default, deserialize_with = "lenient_string")]
    last_error: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAlert {
    #[serde(default, deserialize_with = "lenient_labels")]
    labels: Labels,
    #[serde(default, deserialize_with = "lenient_string")]
    state: String,
    #[serde(default, deserialize_with = "lenient_string")]
    value: String,
    #[serde(default, deserialize_with = "lenient_labels")]
    annotations: Labels,
    #[serde(default, deserialize_with = "lenient_string")]
    active_at: String,
}

pub fn decode_groups(payload: &str) -> Result<Decoded, DecodeError> {
    let root: Value = serde_json::from_str(payload)?;
    decode_value(root)
}

pub fn decode_value(root: Value) -> Result<Decoded, DecodeError> {
    let items = match root {
        Value::Array(items) => items,
        Value::Object(mut obj) => {
            if let Some(status) = obj.get("status").and_then(Value::as_str) {
                if status != "success" {
                    let msg = obj
                        .get("error")
                        .and_then(Value::as_str)
                        .unwrap_or(status)
                        .to_string();
                    return Err(DecodeError::Api(msg));
                }
            }
            let groups = match obj.remove("data") {
                Some(Value::Object(mut data)) => data.remove("groups"),
                Some(_) => None,
                None => obj.remove("groups"),
            };
            match groups {
                Some(Value::Array(items)) => items,
                Some(Value::Null) | None => Vec::new(),
                Some(other) => {
                    tracing::warn!(kind = value_kind(&other), "groups is not a list, treating as empty");
                    Vec::new()
                }
            }
        }
        other => {
            return Err(DecodeError::Shape(format!(
                "expected object or array, got {}",
                value_kind(&other)
            )))
        }
    };

    let mut report = DecodeReport::default();
    let mut groups = Vec::with_capacity(items.len());

    for item in items {
        match serde_json::from_value::<RawGroup>(item) {
            Ok(raw) => groups.push(convert_group(raw, &mut report)),
            Err(e) => {
                tracing::warn!(error = %e, "skipping malformed rule group");
                report.skipped_groups += 1;
            }
        }
    }

    Ok(Decoded { groups, report })
}

fn convert_group(raw: RawGroup, report: &mut DecodeReport) -> RuleGroup {
    let mut rules = Vec::with_capacity(raw.rules.len());
    for item in raw.rules {
        let parsed = match serde_json::from_value::<RawRule>(item) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(group = %raw.name, error = %e, "skipping malformed rule");
                report.skipped_rules += 1;
                continue;
            }
        };
        if parsed.kind == "recording" {
            report.recording_rules += 1;
            continue;
        }
        if let Some(rule) = convert_rule(parsed, &raw.name, report) {
            rules.push(rule);
        }
    }

    RuleGroup {
        name: raw.name,
        file: raw.file,
        interval: raw.interval,
        rules,
    }
}

fn convert_rule(raw: RawRule, group: &str, report: &mut DecodeReport) -> Option<Rule> {
    let state = match raw.state.parse::<RuleState>() {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!(group, rule = %raw.name, error = %e, "skipping rule with unknown state");
            report.skipped_rules += 1;
            return None;
        }
    };

    let mut alerts = Vec::with_capacity(raw.alerts.len());
    for item in raw.alerts {
        let parsed = serde_json::from_value::<RawAlert>(item)
            .map_err(|e| e.to_string())
            .and_then(|a| match a.state.parse::<RuleState>() {
                Ok(state) => Ok(Alert {
                    labels: a.labels,
                    state,
                    value: a.value,
                    annotations: a.annotations,
                    active_at: a.active_at,
                }),
                Err(e) => Err(e.to_string()),
            });
        match parsed {
            Ok(alert) => alerts.push(alert),
            Err(error) => {
                tracing::warn!(group, rule = %raw.name, %error, "skipping malformed alert");
                report.skipped_alerts += 1;
            }
        }
    }

    Some(Rule {
        name: raw.name,
        state,
        query: raw.query,
        duration: raw.duration,
        labels: raw.labels,
        annotations: raw.annotations,
        alerts,
        health: raw.health,
        last_error: Some(raw.last_error).filter(|e| !e.is_empty()),
    })
}

fn value_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn lenient_string<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

fn lenient_f64<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

fn lenient_list<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Value>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Array(items) => items,
        _ => Vec::new(),
    })
}

fn lenient_labels<'de, D: Deserializer<'de>>(d: D) -> Result<Labels, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Object(map) => map
            .into_iter()
            .filter_map(|(k, v)| match v {
                Value::String(s) => Some((k, s)),
                Value::Number(n) => Some((k, n.to_string())),
                Value::Bool(b) => Some((k, b.to_string())),
                _ => None,
            })
            .collect(),
        _ => Labels::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENVELOPE: &str = r#"{
      "status": "success",
      "data": {
        "groups": [
          {
            "name": "node",
            "file": "/etc/prometheus/rules/node.yml",
            "interval": 30,
            "rules": [
              {
                "type": "alerting",
                "name": "HighCPU",
                "query": "cpu > 0.9",
                "duration": 300,
                "state": "firing",
                "health": "ok",
                "labels": {"severity": "page"},
                "annotations": {"summary": "CPU is hot"},
                "alerts": [
                  {"labels": {"instance": "a"}, "state": "firing", "value": "0.97", "activeAt": "2024-01-01T00:00:00Z"},
                  {"labels": {"instance": "b"}, "state": "firing", "value": "0.93", "activeAt": "2024-01-01T00:01:00Z"}
                ]
              },
              {"type": "recording", "name": "job:cpu:avg", "query": "avg(cpu)"},
              {"type": "alerting", "name": "LowDisk", "state": "inactive", "alerts": null}
            ]
          }
        ]
      }
    }"#;

    #[test]
    fn decodes_api_envelope() {
        let decoded = decode_groups(ENVELOPE).unwrap();
        assert_eq!(decoded.groups.len(), 1);
        let group = &decoded.groups[0];
        assert_eq!(group.file, "/etc/prometheus/rules/node.yml");
        assert_eq!(group.interval, 30.0);
        assert_eq!(group.rules.len(), 2);
        assert_eq!(group.rules[0].alerts.len(), 2);
        assert_eq!(group.rules[0].alerts[1].active_at, "2024-01-01T00:01:00Z");
        assert_eq!(group.rules[0].annotations["summary"], "CPU is hot");
        assert!(group.rules[1].alerts.is_empty());
        assert_eq!(decoded.report.recording_rules, 1);
        assert!(decoded.report.is_clean());
    }

    #[test]
    fn decodes_bare_array() {
        let decoded = decode_groups(r#"[{"name": "g", "file": "f.yml"}]"#).unwrap();
        assert_eq!(decoded.groups.len(), 1);
        assert!(decoded.groups[0].rules.is_empty());
    }

    #[test]
    fn decodes_groups_object() {
        let decoded = decode_groups(r#"{"groups": [{"name": "g"}]}"#).unwrap();
        assert_eq!(decoded.groups[0].name, "g");
    }

    #[test]
    fn missing_groups_is_empty() {
        let decoded = decode_groups(r#"{"status": "success", "data": {}}"#).unwrap();
        assert!(decoded.groups.is_empty());
    }

    #[test]
    fn api_error_surfaces_message() {
        let err = decode_groups(r#"{"status": "error", "error": "bad query"}"#).unwrap_err();
        assert!(matches!(err, DecodeError::Api(ref m) if m == "bad query"));
    }

    #[test]
    fn scalar_root_rejected() {
        let err = decode_groups("42").unwrap_err();
        assert!(matches!(err, DecodeError::Shape(_)));
    }

    #[test]
    fn invalid_json_rejected() {
        assert!(matches!(decode_groups("{"), Err(DecodeError::Json(_))));
    }

    #[test]
    fn unknown_state_skips_rule_only() {
        let payload = r#"[{"name": "g", "rules": [
            {"name": "A", "state": "exploded"},
            {"name": "B", "state": "pending"}
        ]}]"#;
        let decoded = decode_groups(payload).unwrap();
        let names: Vec<_> = decoded.groups[0].rules.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["B"]);
        assert_eq!(decoded.report.skipped_rules, 1);
    }

    #[test]
    fn non_string_name_tolerated() {
        let decoded = decode_groups(r#"[{"name": 7, "rules": [{"name": null, "state": "firing"}]}]"#).unwrap();
        assert_eq!(decoded.groups[0].name, "7");
        assert_eq!(decoded.groups[0].rules[0].name, "");
    }

    #[test]
    fn malformed_group_skipped() {
        let decoded = decode_groups(r#"["oops", {"name": "ok"}]"#).unwrap();
        assert_eq!(decoded.groups.len(), 1);
        assert_eq!(decoded.report.skipped_groups, 1);
    }

    #[test]
    fn malformed_alert_skipped() {
        let payload = r#"[{"name": "g", "rules": [
            {"name": "A", "state": "firing", "alerts": [{"state": "firing"}, {"state": "??"}, 3]}
        ]}]"#;
        let decoded = decode_groups(payload).unwrap();
        assert_eq!(decoded.groups[0].rules[0].alerts.len(), 1);
        assert_eq!(decoded.report.skipped_alerts, 2);
    }
}
