// src/config.rs
use std::path::{Path, PathBuf};

use arqa_domain::Period;
use arqa_infra::persistence::FileReader;
use arqa_shared_kernel::{ErrorContext, PresentationError, Result};
use serde::Deserialize;

use crate::cli::{Args, Command, OutputFormat};

pub const DEFAULT_DATA_DIR: &str = "data";

/// Optional YAML settings file.
///
/// ```yaml
/// data_dir: ./data
/// format: table
/// period: 30d
/// search_fields: [sku, name]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub data_dir: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub period: Option<String>,
    pub search_fields: Vec<String>,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let text = FileReader::read_to_string(path)?;
        serde_yaml::from_str(&text).with_context(|| format!("parsing settings {}", path.display()))
    }
}

/// Settings after merging the YAML file under the command-line flags.
#[derive(Debug)]
pub struct Config {
    pub data_dir: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    /// Period used when a command takes one and none was given.
    pub default_period: Period,
    /// Search fields for `query` when none were given on the command line.
    pub search_fields: Vec<String>,
    pub command: Command,
}

impl Config {
    pub fn resolve(args: Args) -> Result<Self> {
        let settings = match &args.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        Self::merge(args, settings)
    }

    pub fn merge(args: Args, settings: Settings) -> Result<Self> {
        let default_period = match settings.period.as_deref() {
            Some(raw) => raw.parse::<Period>().map_err(|e| PresentationError::InvalidValue {
                flag: "period".to_string(),
                value: raw.to_string(),
                reason: e.to_string(),
            })?,
            None => Period::default(),
        };

        Ok(Self {
            data_dir: args
                .data_dir
                .or(settings.data_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR)),
            format: args.format.or(settings.format).unwrap_or_default(),
            output: args.output,
            default_period,
            search_fields: settings.search_fields,
            command: args.command,
        })
    }
}
