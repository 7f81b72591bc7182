use std::path::Path;
use super::schema::CliConfig;

#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Parse(serde_yaml::Error),
    Validation(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Parse(e) => write!(f, "parse: {e}"),
            Self::Validation(msg) => write!(f, "validation: {msg}"),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_yaml::Error> for LoadError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Parse(e)
    }
}

pub fn load_from_file(path: &Path) -> Result<CliConfig, LoadError> {
    let contents = std::fs::read_to_string(path)?;
    load_from_str(&contents)
}

pub fn load_from_str(yaml: &str) -> Result<CliConfig, LoadError> {
    let cfg: CliConfig = serde_yaml::from_str(yaml)?;
    validate(&cfg)?;
    Ok(cfg)
}

fn validate(cfg: &CliConfig) -> Result<(), LoadError> {
    if cfg.source.trim().is_empty() {
        return Err(LoadError::Validation("source must not be empty".into()));
    }
    if cfg.timeout_seconds == 0 {
        return Err(LoadError::Validation("timeout_seconds must be > 0".into()));
    }
    if cfg.prefs_path.as_deref().is_some_and(|p| p.trim().is_empty()) {
        return Err(LoadError::Validation(
            "prefs_path must not be empty when set".into(),
        ));
    }
    Ok(())
}
