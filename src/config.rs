use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub language: String,

    /// Compiled dictionary location. Defaults to `<data dir>/<language>.dict`.
    pub dictionary: Option<PathBuf>,

    /// Word-list source for `dict fetch` (a URL or a local file path).
    pub wordlist: Option<String>,

    /// Base URL of the user-settings service holding the custom word list.
    pub settings_url: Option<String>,

    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

fn default_max_suggestions() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "en_US".to_string(),
            dictionary: None,
            wordlist: None,
            settings_url: None,
            max_suggestions: 5,
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(
        language: String,
        dictionary: Option<PathBuf>,
        settings_url: Option<String>,
    ) -> Result<Self> {
        let mut config = Self::default();

        // Load global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        // Load local config (overrides global)
        let local_path = PathBuf::from(".spellmark.toml");
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        // Apply CLI overrides
        config.language = language;
        if dictionary.is_some() {
            config.dictionary = dictionary;
        }
        if settings_url.is_some() {
            config.settings_url = settings_url;
        }

        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        if other.language != "en_US" {
            self.language = other.language;
        }
        if other.dictionary.is_some() {
            self.dictionary = other.dictionary;
        }
        if other.wordlist.is_some() {
            self.wordlist = other.wordlist;
        }
        if other.settings_url.is_some() {
            self.settings_url = other.settings_url;
        }
        if other.max_suggestions != default_max_suggestions() {
            self.max_suggestions = other.max_suggestions;
        }
        self
    }

    /// Resolve the dictionary resource location for this configuration.
    pub fn dictionary_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.dictionary {
            return Ok(path.clone());
        }
        let data_dir = Self::data_dir().context("Failed to get data directory")?;
        Ok(data_dir.join(format!("{}.dict", self.language)))
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "spellmark").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn data_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "spellmark").map(|dirs| dirs.data_dir().to_path_buf())
    }
}
