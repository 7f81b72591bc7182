use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

pub trait PreferenceStore: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<Value>, StoreError>;
    fn save(&self, key: &str, value: Value) -> Result<(), StoreError>;
    fn delete(&self, key: &str) -> Result<(), StoreError>;
}

#[derive(Debug)]
pub enum StoreError {
    Io(std::io::Error),
    Json(serde_json::Error),
    /// The backing document parsed but is not a key/value object.
    Corrupt(String),
    Unavailable(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Json(e) => write!(f, "json: {e}"),
            Self::Corrupt(msg) => write!(f, "corrupt store: {msg}"),
            Self::Unavailable(msg) => write!(f, "store unavailable: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Reads `key`, falling back to `default` when the key is absent, the
/// store fails, or the stored value no longer has the expected shape.
pub fn get<S, V>(store: &S, key: &str, default: V) -> V
where
    S: PreferenceStore + ?Sized,
    V: DeserializeOwned,
{
    match store.load(key) {
        Ok(Some(value)) => match serde_json::from_value(value) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(key, error = %e, "stored preference has wrong shape, using default");
                default
            }
        },
        Ok(None) => default,
        Err(e) => {
            tracing::warn!(key, error = %e, "preference store read failed, using default");
            default
        }
    }
}

/// Writes `key`. Failures are logged and otherwise ignored.
pub fn set<S, V>(store: &S, key: &str, value: &V)
where
    S: PreferenceStore + ?Sized,
    V: Serialize,
{
    let result = serde_json::to_value(value)
        .map_err(StoreError::from)
        .and_then(|v| store.save(key, v));
    if let Err(e) = result {
        tracing::warn!(key, error = %e, "preference store write failed");
    }
}
