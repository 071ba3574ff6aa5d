//! Tally configuration
//!
//! Defaults can be overridden by a TOML file, and then by command-line flags:
//!
//! ```toml
//! dir = "results"
//! tournaments = [1, 2, 3]
//! player = 0
//! malformed = "error"
//! format = "json"
//! ```

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Tournament index read when none is given
pub const DEFAULT_TOURNAMENT: u32 = 3;

/// What to do with a data line whose winner field cannot be read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Leave the line out of the tally and log a warning
    #[default]
    Skip,
    /// Count the line as if player 0 had won. Only the winner field decides
    /// whether a line is unreadable
    Zero,
    /// Stop with an error naming the line
    Error,
}

/// How results are written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TallyConfig {
    /// Directory holding the `tnmt_<N>.txt` files
    pub dir: PathBuf,
    /// Tournament indices to report, in order
    pub tournaments: Vec<u32>,
    /// Player whose wins are counted
    pub player: i32,
    pub malformed: MalformedPolicy,
    pub format: OutputFormat,
}

impl Default for TallyConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            tournaments: vec![DEFAULT_TOURNAMENT],
            player: 0,
            malformed: MalformedPolicy::Skip,
            format: OutputFormat::Text,
        }
    }
}

impl TallyConfig {
    /// Load config from a TOML file; missing keys keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| Error::Config(e.to_string()))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
