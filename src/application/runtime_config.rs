use std::env;
use std::path::PathBuf;

use snafu::prelude::*;

/// Resolved invocation context. The scaffold is always rooted in the
/// directory holding the running executable.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub base: PathBuf,
}

impl RuntimeConfig {
    pub fn detect() -> Result<Self, RuntimeConfigError> {
        let exe = env::current_exe().context(CurrentExeSnafu)?;
        let base = exe
            .parent()
            .map(PathBuf::from)
            .context(NoParentDirectorySnafu { path: exe.clone() })?;

        Ok(Self { base })
    }
}

#[derive(Debug, Snafu)]
pub enum RuntimeConfigError {
    #[snafu(display("Failed to obtain the current executable path"))]
    CurrentExeError { source: std::io::Error },
    #[snafu(display("Executable path {} has no parent directory", path.display()))]
    NoParentDirectoryError { path: PathBuf },
}
