// std imports
use std::include_str;
use std::path::Path;

// third-party imports
use config::{Config, File, FileFormat};
use serde::Deserialize;
use wildcard::Strategy;

// local imports
use crate::error::Error;

// ---

static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.yaml");

// ---

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub solver: Strategy,
    pub max_input_length: usize,
    pub max_recursive_input_length: usize,
    pub show_warnings: bool,
}

impl Settings {
    /// Loads the embedded defaults, overlaid with the given configuration file if any.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml));
        if let Some(path) = path {
            log::debug!("loading configuration from {}", path.display());
            builder = builder.add_source(File::from(path));
        }

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Parses settings from a YAML document overlaid on the embedded defaults.
    pub fn from_yaml(content: &str) -> Result<Self, Error> {
        Ok(Config::builder()
            .add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml))
            .add_source(File::from_str(content, FileFormat::Yaml))
            .build()?
            .try_deserialize()?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            solver: Strategy::Greedy,
            max_input_length: 4096,
            max_recursive_input_length: 64,
            show_warnings: true,
        }
    }
}
