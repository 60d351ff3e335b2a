//! Optional `map_clean.toml` run configuration.
//!
//! Without a config file a pass reads `season_map_rawdata.json`, writes
//! `season_map_clean.json` and applies the classic preset.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::level_filters::LevelFilter;

use crate::error::{MapCleanError, Result};
use crate::sanitizer::{Preset, RuleOverrides, RuleSet};

pub const CONFIG_FILE: &str = "map_clean.toml";
pub const DEFAULT_INPUT: &str = "season_map_rawdata.json";
pub const DEFAULT_OUTPUT: &str = "season_map_clean.json";

////////////////////
/// TOML STRUCTS ///
////////////////////

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    input: Option<PathBuf>,

    #[serde(default)]
    output: Option<PathBuf>,

    #[serde(default)]
    preset: Option<String>, // "classic" | "thorium"

    #[serde(default)]
    log_level: Option<String>,

    #[serde(default)]
    rules: RuleOverrides, // [rules]
}

/// Resolved settings for one sanitization pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub preset: Preset,
    pub rules: RuleSet,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            preset: Preset::default(),
            rules: Preset::default().rules(),
            log_level: LevelFilter::WARN,
        }
    }
}

impl Config {
    /// Load `map_clean.toml` from `dir` if present, otherwise use the defaults.
    /// Relative file paths are resolved against `dir`.
    pub fn load(dir: &Path) -> Result<Config> {
        let path = dir.join(CONFIG_FILE);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
            Err(source) => return Err(MapCleanError::ConfigRead { path, source }),
        };

        let config = Config::from_toml_str(&contents, &path)?;
        Ok(Config {
            input: dir.join(config.input),
            output: dir.join(config.output),
            ..config
        })
    }

    /// Parse config text. `origin` is only used in error messages.
    pub fn from_toml_str(contents: &str, origin: &Path) -> Result<Config> {
        let file: ConfigFile = toml::from_str(contents).map_err(|source| MapCleanError::Config {
            path: origin.to_path_buf(),
            source,
        })?;

        let defaults = Config::default();

        let preset = match file.preset.as_deref() {
            Some(name) => name.parse::<Preset>()?,
            None => defaults.preset,
        };

        let log_level = match file.log_level {
            Some(level) => level
                .trim()
                .parse::<LevelFilter>()
                .map_err(|_| MapCleanError::InvalidLogLevel(level.clone()))?,
            None => defaults.log_level,
        };

        Ok(Config {
            input: file.input.unwrap_or(defaults.input),
            output: file.output.unwrap_or(defaults.output),
            preset,
            rules: file.rules.apply(preset.rules()),
            log_level,
        })
    }
}
