use reelshelf_models::CatalogEntry;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::paths::PathManager;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Items loaded into every fresh catalog, in order.
    #[serde(default = "default_library")]
    pub library: Vec<CatalogEntry>,
    /// Whole seasons added after `library`.
    #[serde(default)]
    pub seasons: Vec<SeasonBatch>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SimulationConfig {
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Fixed RNG seed for reproducible runs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RankingConfig {
    #[serde(default = "default_top_count")]
    pub top_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
    /// Write logs to a file instead of stderr
    #[serde(default)]
    pub to_file: bool,
    /// Overrides the default log file location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeasonBatch {
    pub title: String,
    pub release_year: i32,
    #[serde(default)]
    pub genre: String,
    pub season: u32,
    pub episodes: u32,
}

fn default_batch_size() -> usize {
    10
}

fn default_top_count() -> usize {
    3
}

fn default_log_level() -> String {
    "info".to_string()
}

fn entry(
    kind: &str,
    title: &str,
    year: i32,
    genre: &str,
    views: u64,
    numbers: Option<(u32, u32)>,
) -> CatalogEntry {
    CatalogEntry {
        kind: kind.to_string(),
        title: title.to_string(),
        release_year: year,
        genre: genre.to_string(),
        views,
        season: numbers.map(|(season, _)| season),
        episode: numbers.map(|(_, episode)| episode),
    }
}

/// The demo library used when no config file exists.
pub fn default_library() -> Vec<CatalogEntry> {
    vec![
        entry("movie", "Inception", 2010, "Sci-Fi", 1_000_000, None),
        entry("episode", "Stranger Things", 2016, "Horror", 5_000_000, Some((1, 3))),
        entry("movie", "The Matrix", 1999, "Action", 2_000_000, None),
        entry("episode", "Breaking Bad", 2008, "Crime", 4_000_000, Some((5, 12))),
    ]
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            seed: None,
        }
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_count: default_top_count(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            to_file: false,
            file: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            ranking: RankingConfig::default(),
            logging: LoggingConfig::default(),
            library: default_library(),
            seasons: Vec::new(),
        }
    }
}

impl LoggingConfig {
    /// Where file logging goes: `file` if set, otherwise the platform log
    /// file when `to_file` is on. `None` means stderr.
    pub fn log_file(&self, paths: &PathManager) -> Option<PathBuf> {
        match &self.file {
            Some(file) => Some(file.clone()),
            None if self.to_file => Some(paths.log_file()),
            None => None,
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Loads `path`, falling back to defaults when the file doesn't exist.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.simulation.batch_size == 0 {
            return Err(anyhow::anyhow!("simulation.batch_size must be at least 1"));
        }
        if self.ranking.top_count == 0 {
            return Err(anyhow::anyhow!("ranking.top_count must be at least 1"));
        }

        for (i, entry) in self.library.iter().enumerate() {
            entry.to_item().map_err(|e| {
                anyhow::anyhow!("library entry {} ({:?}) is invalid: {}", i + 1, entry.title, e)
            })?;
        }

        for batch in &self.seasons {
            if batch.episodes == 0 {
                return Err(anyhow::anyhow!(
                    "season {} of {:?} must have at least one episode",
                    batch.season,
                    batch.title
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_load_and_save() {
        let file = NamedTempFile::new().unwrap();
        let mut config = Config::default();
        config.simulation.seed = Some(99);
        config.seasons.push(SeasonBatch {
            title: "The Wire".to_string(),
            release_year: 2002,
            genre: "Crime".to_string(),
            season: 1,
            episodes: 13,
        });

        config.save_to_file(file.path()).unwrap();
        let loaded = Config::load_from_file(file.path()).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.library.len(), 4);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = toml::from_str("[ranking]\ntop_count = 5\n").unwrap();
        assert_eq!(config.ranking.top_count, 5);
        assert_eq!(config.simulation.batch_size, 10);
        assert_eq!(config.library, default_library());
        assert!(config.seasons.is_empty());
    }

    #[test]
    fn test_library_from_toml() {
        let content = r#"
            [[library]]
            kind = "movie"
            title = "Alien"
            release_year = 1979
            genre = "Horror"

            [[library]]
            kind = "episode"
            title = "Lost"
            release_year = 2004
            season = 1
            episode = 2
            views = 15
        "#;
        let config: Config = toml::from_str(content).unwrap();
        assert_eq!(config.library.len(), 2);
        assert_eq!(config.library[1].to_item().unwrap().to_string(), "Lost S01E02");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_log_file_resolution() {
        let paths = PathManager::with_base(PathBuf::from("/srv/shelf"));
        let mut logging = LoggingConfig::default();
        assert_eq!(logging.log_file(&paths), None);

        logging.to_file = true;
        assert_eq!(logging.log_file(&paths), Some(PathBuf::from("/srv/shelf/logs/reelshelf.log")));

        logging.file = Some(PathBuf::from("/tmp/custom.log"));
        assert_eq!(logging.log_file(&paths), Some(PathBuf::from("/tmp/custom.log")));
    }

    #[test]
    fn test_config_validate() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.simulation.batch_size = 0;
        assert!(config.validate().is_err());
        config.simulation.batch_size = 10;

        config.library[0].kind = "vinyl".to_string();
        assert!(config.validate().is_err());
        config.library = default_library();

        config.seasons.push(SeasonBatch {
            title: "Empty".to_string(),
            release_year: 2000,
            genre: String::new(),
            season: 1,
            episodes: 0,
        });
        assert!(config.validate().is_err());
    }
}
