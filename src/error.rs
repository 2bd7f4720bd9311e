/// Fatal errors for a grouping run.
///
/// Malformed input lines are not errors at this level; they are reported and
/// skipped by the engine. Only configuration problems and I/O failures on the
/// input or output streams end a run.

use std::fmt;

use crate::config::ConfigError;

#[derive(Debug)]
pub enum FgroupsError {
    /// Reading input or writing output failed.
    Io(std::io::Error),
    /// Configuration could not be loaded.
    Config(ConfigError),
}

impl fmt::Display for FgroupsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FgroupsError::Io(e) => write!(f, "I/O error: {}", e),
            FgroupsError::Config(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for FgroupsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FgroupsError::Io(e) => Some(e),
            FgroupsError::Config(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for FgroupsError {
    fn from(e: std::io::Error) -> Self {
        FgroupsError::Io(e)
    }
}

impl From<ConfigError> for FgroupsError {
    fn from(e: ConfigError) -> Self {
        FgroupsError::Config(e)
    }
}
