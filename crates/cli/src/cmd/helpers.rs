use anyhow::{bail, Context, Result};
use rulescope_common::{decode_groups, Decoded};
use rulescope_engine::{FileStore, Preferences};
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{load_from_file, CliConfig};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub fn default_config_path() -> PathBuf {
    if let Some(dir) = dirs::config_dir() {
        return dir.join("rulescope").join("config.yml");
    }
    PathBuf::from("/etc/rulescope/config.yml")
}

pub fn default_prefs_path() -> PathBuf {
    if let Some(dir) = dirs::data_dir() {
        return dir.join("rulescope").join("prefs.json");
    }
    std::env::temp_dir().join("rulescope").join("prefs.json")
}

pub fn load_config(config_path: Option<&str>) -> Result<CliConfig> {
    let path = config_path
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path);

    load_from_file(&path).with_context(|| format!("loading config from {}", path.display()))
}

/// An explicit `--config` must exist; the default location is optional.
pub fn load_optional_config(config_path: Option<&str>) -> Result<Option<CliConfig>> {
    if config_path.is_some() {
        return load_config(config_path).map(Some);
    }
    if default_config_path().exists() {
        return load_config(None).map(Some);
    }
    Ok(None)
}

pub fn resolve_source(source_flag: Option<&str>, cfg: Option<&CliConfig>) -> Result<String> {
    if let Some(s) = source_flag {
        return Ok(s.to_string());
    }
    match cfg {
        Some(c) => Ok(c.source.clone()),
        None => bail!(
            "no rules source: pass --source or set `source` in {}",
            default_config_path().display()
        ),
    }
}

pub fn resolve_prefs_path(prefs_flag: Option<&str>, cfg: Option<&CliConfig>) -> PathBuf {
    if let Some(p) = prefs_flag {
        return PathBuf::from(p);
    }
    cfg.and_then(|c| c.prefs_path.as_deref())
        .map(PathBuf::from)
        .unwrap_or_else(default_prefs_path)
}

pub fn resolve_timeout(cfg: Option<&CliConfig>) -> Duration {
    cfg.map(|c| Duration::from_secs(c.timeout_seconds))
        .unwrap_or(DEFAULT_TIMEOUT)
}

pub fn open_preferences(
    prefs_flag: Option<&str>,
    config_path: Option<&str>,
) -> Result<Preferences<FileStore>> {
    let cfg = load_optional_config(config_path)?;
    let path = resolve_prefs_path(prefs_flag, cfg.as_ref());
    Ok(Preferences::new(FileStore::new(&path)))
}

pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

pub async fn fetch_payload(source: &str, timeout: Duration) -> Result<String> {
    if is_remote(source) {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let body = client
            .get(source)
            .send()
            .await
            .with_context(|| format!("requesting {source}"))?
            .error_for_status()?
            .text()
            .await?;
        return Ok(body);
    }
    tokio::fs::read_to_string(source)
        .await
        .with_context(|| format!("reading {source}"))
}

pub async fn load_groups(source: &str, timeout: Duration) -> Result<Decoded> {
    let payload = fetch_payload(source, timeout).await?;
    let decoded = decode_groups(&payload).with_context(|| format!("decoding rules from {source}"))?;
    if !decoded.report.is_clean() {
        tracing::warn!(
            source,
            skipped_groups = decoded.report.skipped_groups,
            skipped_rules = decoded.report.skipped_rules,
            skipped_alerts = decoded.report.skipped_alerts,
            "payload contained malformed entries"
        );
    }
    Ok(decoded)
}
