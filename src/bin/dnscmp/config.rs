// Copyright 2022 Matthew Ingwersen.
//
// Licensed under the Apache License, Version 2.0 (the "License"); you
// may not use this file except in compliance with the License. You may
// obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or
// implied. See the License for the specific language governing
// permissions and limitations under the License.

//! Implements the batch configuration file.

use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use log::Level::Debug;
use log::{debug, log_enabled};
use serde::Deserialize;

use dnscmp::Mode;

use crate::args::CompareArgs;
use crate::inputs::Format;

////////////////////////////////////////////////////////////////////////
// CONFIGURATION LOADING                                              //
////////////////////////////////////////////////////////////////////////

/// Loads the configuration from the file given by `path`.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<Config> {
    let dir = match path.as_ref().parent() {
        Some(p) => p,
        None => return Err(anyhow!("the configuration file path has no parent")),
    };
    let raw_config = fs::read(path.as_ref()).context("failed to read the configuration file")?;
    let mut config: Config =
        toml::from_slice(&raw_config).context("failed to parse the configuration file")?;

    // When loading the configuration from a path, all message file
    // paths are interpreted relative to the configuration file's
    // directory.
    for pair in &mut config.pairs {
        if pair.expected.is_relative() {
            pair.expected = dir.join(&pair.expected);
        }
        if pair.actual.is_relative() {
            pair.actual = dir.join(&pair.actual);
        }
    }

    log_config_summary(&config);
    Ok(config)
}

/// Loads the configuration for a single comparison from the parsed
/// command line arguments given by `args`.
pub fn load_from_args(args: CompareArgs) -> Config {
    let config = Config {
        mode: args.mode.into(),
        format: args.format.into(),
        pairs: vec![PairConfig {
            name: None,
            expected: args.expected,
            actual: args.actual,
            mode: None,
            format: None,
        }],
    };
    log_config_summary(&config);
    config
}

/// Summarizes the configuration in the log, if the debug log level is
/// enabled.
fn log_config_summary(config: &Config) {
    if !log_enabled!(Debug) {
        return;
    }

    let mut message = format!(
        "Configuration loaded:\n\
         Default mode:   {}\n\
         Default format: {}\n\
         Pairs:          {}",
        Mode::from(config.mode),
        Format::from(config.format),
        config.pairs.len(),
    );
    for pair in &config.pairs {
        write!(
            message,
            "\n  {} ({}, {})",
            pair.name(),
            pair.mode(config),
            pair.format(config),
        )
        .unwrap();
    }
    debug!("{}", message);
}

////////////////////////////////////////////////////////////////////////
// CONFIGURATION FILE STRUCTURE                                       //
////////////////////////////////////////////////////////////////////////

/// The complete configuration file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_mode")]
    pub mode: ConfigMode,
    #[serde(default = "default_format")]
    pub format: ConfigFormat,
    pub pairs: Vec<PairConfig>,
}

fn default_mode() -> ConfigMode {
    ConfigMode::IgnoreTtls
}

fn default_format() -> ConfigFormat {
    ConfigFormat::Raw
}

/// The configuration of a single pair of messages to compare. The
/// mode and format default to those given at the top level.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PairConfig {
    pub name: Option<String>,
    pub expected: PathBuf,
    pub actual: PathBuf,
    pub mode: Option<ConfigMode>,
    pub format: Option<ConfigFormat>,
}

impl PairConfig {
    /// Returns the name of the pair for reporting. Unnamed pairs are
    /// named after the actual message's file.
    pub fn name(&self) -> String {
        match self.name {
            Some(ref name) => name.clone(),
            None => self.actual.display().to_string(),
        }
    }

    /// Returns the mode to use for this pair.
    pub fn mode(&self, config: &Config) -> Mode {
        self.mode.unwrap_or(config.mode).into()
    }

    /// Returns the format of this pair's files.
    pub fn format(&self, config: &Config) -> Format {
        self.format.unwrap_or(config.format).into()
    }
}

////////////////////////////////////////////////////////////////////////
// WRAPPERS OVER DNSCMP TYPES FOR SERDE                               //
////////////////////////////////////////////////////////////////////////

/// A deserializable wrapper over the [`dnscmp::Mode`] type.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
pub enum ConfigMode {
    #[serde(rename = "exact")]
    Exact,
    #[serde(rename = "ignore-ttls")]
    IgnoreTtls,
}

impl From<ConfigMode> for Mode {
    fn from(config_mode: ConfigMode) -> Self {
        match config_mode {
            ConfigMode::Exact => Self::Exact,
            ConfigMode::IgnoreTtls => Self::IgnoreTtls,
        }
    }
}

impl From<Mode> for ConfigMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Exact => Self::Exact,
            Mode::IgnoreTtls => Self::IgnoreTtls,
        }
    }
}

/// A deserializable wrapper over the [`Format`] type.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
pub enum ConfigFormat {
    #[serde(rename = "raw")]
    Raw,
    #[serde(rename = "hex")]
    Hex,
    #[serde(rename = "base64")]
    Base64,
}

impl From<ConfigFormat> for Format {
    fn from(config_format: ConfigFormat) -> Self {
        match config_format {
            ConfigFormat::Raw => Self::Raw,
            ConfigFormat::Hex => Self::Hex,
            ConfigFormat::Base64 => Self::Base64,
        }
    }
}

impl From<Format> for ConfigFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Raw => Self::Raw,
            Format::Hex => Self::Hex,
            Format::Base64 => Self::Base64,
        }
    }
}
