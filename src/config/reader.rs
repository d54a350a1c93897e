use std::fs;
use std::io::{Error as IoError, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use snafu::prelude::*;

pub const DEFAULT_CONTENT: &str = r#"
# This configuration file is generated automatically. Feel free to do some
# modification.

# The `timer` section specifies the timer settings. Durations are minutes.
# Every `long_break_interval`th completed work phase is followed by a long
# break instead of a short one.
[timer]
work = 25
short_break = 5
long_break = 20
long_break_interval = 4

# The `notification.<kind>` sections specify the message shown in desktop
# notifications at each phase transition. `body` is optional.
[notification.short_break]
summary = "Break Time!"
body = "Take a short break and stretch your legs!"

[notification.long_break]
summary = "Long Break!"
body = "Great job! Take a long break and recharge."

[notification.work]
summary = "Work Time"
body = "Back to focus!"
"#;

/// A reader which reads the configuration content and creates a default
/// configuration file if it is missing.
pub struct ContentReader {
    path: PathBuf,
    create_new: bool,
}

impl ContentReader {
    /// Creates a new [`ContentReader`].
    pub fn new<P: AsRef<Path>>(path: P, create_new: bool) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            create_new,
        }
    }

    /// Read content from the file. When the file is missing and `create_new`
    /// was requested, the default template is written out and returned.
    ///
    /// # Errors
    ///
    /// This function will return an error if the file doesn't exist or it
    /// fails to create a configuration file.
    pub fn read(self) -> Result<String, ReadContentError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(content),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                if self.create_new {
                    self.create_default()
                } else {
                    NotFoundSnafu { path: self.path }.fail()
                }
            }
            Err(err) => Err(err).context(FileSystemSnafu {
                when: "Reading configuration",
            }),
        }
    }

    /// Write the default template to the configured path and hand its
    /// content back.
    ///
    /// # Errors
    ///
    /// This function will return an error if the write fails.
    fn create_default(self) -> Result<String, ReadContentError> {
        fs::write(&self.path, DEFAULT_CONTENT).context(FileSystemSnafu {
            when: "Writing default configuration content",
        })?;
        Ok(DEFAULT_CONTENT.to_owned())
    }
}

/// An error type for reading content from the configuration file.
#[derive(Debug, Snafu, Clone)]
#[non_exhaustive]
pub enum ReadContentError {
    #[snafu(display("Could not open inexistent file {}", path.display()))]
    NotFound { path: PathBuf },
    #[snafu(display("Could not access the configuration file: {when}"))]
    FileSystem {
        when: String,
        #[snafu(source(from(IoError, Arc::new)))]
        source: Arc<IoError>,
    },
}
