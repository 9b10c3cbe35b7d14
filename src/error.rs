//! Crate error type.
//!
//! Almost everything that goes wrong during a check run degrades to a
//! [`CheckResult`](crate::result::CheckResult) so that a single run collects
//! every diagnostic in one pass. The variants here are the exceptions: they
//! abort the affected check instance (or the configuration load) instead of
//! accumulating.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The configuration file (or the template fallback) could not be read
    /// or written.
    #[error("failed to access configuration {path}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML or not a mapping at the
    /// top level.
    #[error("failed to parse configuration {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// An enabled check instance has no `Parameters` section. This is the
    /// one configuration error that is fatal for the instance rather than
    /// reported as a check result.
    #[error("no configuration parameters/attributes provided for {check} check in \"{config_path}\"!")]
    MissingParameters { check: String, config_path: String },
}
