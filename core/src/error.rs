use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DatepickErr>;

/// Failures outside the calendar core: loading configuration and preparing
/// the environment the picker runs in. Navigation itself never fails.
#[derive(Error, Debug)]
pub enum DatepickErr {
    #[error("could not find home directory")]
    HomeDirNotFound,

    #[error("failed to parse {}: {source}", path.display())]
    ParseToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A `-c key=value` override could not be applied to the config tree.
    #[error("invalid config override: {0}")]
    InvalidOverride(String),

    #[error("invalid output format `{0}`")]
    InvalidOutputFormat(String),

    #[error("invalid start date `{0}`, expected YYYY-MM-DD")]
    InvalidStartDate(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}
