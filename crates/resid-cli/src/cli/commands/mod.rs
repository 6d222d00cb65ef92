//! CLI command handlers, one file per command.

mod absolute;
mod classify;
mod config_path;
mod inspect;

pub use absolute::run_absolute;
pub use classify::run_classify;
pub use config_path::run_config_path;
pub use inspect::run_inspect;
