pub mod check;
pub mod config;
mod context;
pub mod init;
pub mod stats;

pub use check::{run_check, run_check_impl};
pub use config::{format_config_text, run_config, run_config_show_impl, run_config_validate_impl};
pub use context::color_choice_to_mode;
pub use init::{generate_config_template, run_init, run_init_impl};
pub use stats::{run_stats, run_stats_impl};
