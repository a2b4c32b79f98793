//! Configuration management with layered hierarchy

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::error::Result;
use crate::core::overrides::OverrideTable;

/// Catalog read when no input is configured
pub const DEFAULT_INPUT: &str = "crossover_parts_verified_seed.json";

/// Enriched catalog written when no output is configured
pub const DEFAULT_OUTPUT: &str = "crossover_parts_verified_enriched.json";

/// Override table artifact written when no path is configured
pub const DEFAULT_DEFAULTS_OUTPUT: &str = "defaults_by_series.json";

/// Name of the per-directory config file
pub const LOCAL_CONFIG_FILE: &str = "xenrich.yaml";

/// xenrich configuration with layered hierarchy
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog to enrich
    pub input: Option<PathBuf>,

    /// Where the enriched catalog is written
    pub output: Option<PathBuf>,

    /// Where the override table is written
    pub defaults_output: Option<PathBuf>,

    /// Alternate override table (JSON) replacing the builtin one
    pub overrides: Option<PathBuf>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (resolved lazily by the accessors)

        // 2. Global user config (~/.config/xenrich/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if let Some(global) = Self::read_file(&global_path) {
                config.merge(global);
            }
        }

        // 3. Working directory config (./xenrich.yaml)
        if let Some(local) = Self::read_file(Path::new(LOCAL_CONFIG_FILE)) {
            config.merge(local);
        }

        // 4. Environment variables
        config.merge(Self::from_env(|key| std::env::var(key).ok()));

        config
    }

    /// Parse a config file, skipping it when missing or unreadable
    fn read_file(path: &Path) -> Option<Config> {
        if !path.exists() {
            return None;
        }
        let contents = std::fs::read_to_string(path).ok()?;
        serde_yml::from_str::<Config>(&contents).ok()
    }

    fn from_env(var: impl Fn(&str) -> Option<String>) -> Config {
        Config {
            input: var("XENRICH_INPUT").map(PathBuf::from),
            output: var("XENRICH_OUTPUT").map(PathBuf::from),
            defaults_output: var("XENRICH_DEFAULTS_OUTPUT").map(PathBuf::from),
            overrides: var("XENRICH_OVERRIDES").map(PathBuf::from),
        }
    }

    /// Get the path to the global config file
    fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "xenrich")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    pub fn merge(&mut self, other: Config) {
        if other.input.is_some() {
            self.input = other.input;
        }
        if other.output.is_some() {
            self.output = other.output;
        }
        if other.defaults_output.is_some() {
            self.defaults_output = other.defaults_output;
        }
        if other.overrides.is_some() {
            self.overrides = other.overrides;
        }
    }

    pub fn input(&self) -> PathBuf {
        self.input
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT))
    }

    pub fn output(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
    }

    pub fn defaults_output(&self) -> PathBuf {
        self.defaults_output
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DEFAULTS_OUTPUT))
    }

    /// The override table to enrich with: the configured file, else builtin
    pub fn override_table(&self) -> Result<OverrideTable> {
        match &self.overrides {
            Some(path) => OverrideTable::from_path(path),
            None => Ok(OverrideTable::builtin()),
        }
    }
}
