mod format;
pub mod prompt;
pub mod render;
pub mod spinner;
mod table;
pub mod theme;

pub use format::{disable_color, print_error, print_json, print_success, print_warning, OutputMode};
pub use table::{build_table, state_cell};
