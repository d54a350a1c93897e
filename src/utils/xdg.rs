use std::io::Error as IoError;
use std::path::PathBuf;
use std::sync::Arc;

use snafu::prelude::*;
use xdg::{BaseDirectories, BaseDirectoriesError};

/// Resolve the absolute path of `file` inside the application's XDG
/// configuration directory, creating the leading directories when they
/// didn't exist before.
///
/// # Errors
///
/// This function will return an error if XDG settings are missing or the
/// directories cannot be created.
pub fn place_config_file(prefix: &str, file: &str) -> Result<PathBuf, XdgError> {
    let base = BaseDirectories::with_prefix(prefix).context(InitSnafu)?;
    base.place_config_file(file).context(FileSystemSnafu {
        message: "Could not create configuration directory for application",
    })
}

/// An error for XDG-related operations.
#[derive(Debug, Snafu, Clone)]
pub enum XdgError {
    #[snafu(display("Could not get XDG settings"))]
    Init {
        #[snafu(source(from(BaseDirectoriesError, Arc::new)))]
        source: Arc<BaseDirectoriesError>,
    },
    #[snafu(display("File system error: {message}"))]
    FileSystem {
        message: String,
        #[snafu(source(from(IoError, Arc::new)))]
        source: Arc<IoError>,
    },
}
