pub mod decode;
pub mod model;
pub mod state;
pub mod stats;

pub use decode::{decode_groups, DecodeError, DecodeReport, Decoded};
pub use model::{Alert, Labels, Rule, RuleGroup};
pub use state::{ParseStateError, RuleState, StateMap};
pub use stats::StatsCount;
