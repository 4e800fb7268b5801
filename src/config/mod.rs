mod loader;
mod model;
mod validation;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, RealFileSystem, parse_config,
};
pub use model::{CONFIG_VERSION, Config, LogConfig, ReportConfig, StatsConfig, ThresholdConfig};
pub use validation::{RunSettings, validate, validate_config_semantics};
