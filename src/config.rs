use crate::aggregate::DEFAULT_MIN_MATCHUP_GAMES;
use crate::service::DEFAULT_MAX_POKEMON;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_CACHE_TTL_HOURS: u64 = 24;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

const APP_DIR_NAME: &str = "vgc-tracker";
const CONFIG_FILE_NAME: &str = "config.toml";
const CACHE_FILE_NAME: &str = "pastes.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How long a fetched paste is served from the cache.
    pub cache_ttl_hours: u64,
    /// Team sheet size cap applied when parsing.
    pub max_pokemon: usize,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Overrides the platform cache location.
    pub cache_file: Option<PathBuf>,
    /// Games against a Pokémon before it shows up in matchup rankings.
    pub min_matchup_games: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl_hours: DEFAULT_CACHE_TTL_HOURS,
            max_pokemon: DEFAULT_MAX_POKEMON,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            user_agent: default_user_agent(),
            cache_file: None,
            min_matchup_games: DEFAULT_MIN_MATCHUP_GAMES,
        }
    }
}

fn default_user_agent() -> String {
    format!("{}/{}", APP_DIR_NAME, env!("CARGO_PKG_VERSION"))
}

impl Config {
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Reads `path`, or the default location when `None`. A missing file
    /// yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_config_path()?,
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_hours.saturating_mul(60 * 60))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn cache_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.cache_file {
            return Ok(path.clone());
        }
        let cache_dir = dirs::cache_dir().context("Could not determine cache directory")?;
        Ok(cache_dir.join(APP_DIR_NAME).join(CACHE_FILE_NAME))
    }
}
