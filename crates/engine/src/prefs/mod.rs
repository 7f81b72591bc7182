mod file;
mod memory;
mod preferences;
mod store;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use preferences::{Preferences, ANNOTATIONS_KEY, SEARCH_KEY, STATE_FILTER_KEY};
pub use store::{get, set, PreferenceStore, StoreError};
