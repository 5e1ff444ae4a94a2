pub mod config;
pub mod paths;

pub use config::{
    default_library, Config, LoggingConfig, RankingConfig, SeasonBatch, SimulationConfig,
};
pub use paths::{PathManager, base_path_override};
