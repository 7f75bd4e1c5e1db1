use std::ffi::{OsStr, OsString};
use std::process::Command;

use super::FileDownloader;

pub const DEFAULT_PROGRAM: &str = "aria2c";

/// Hands each url to an external download tool as `<program> <url>`.
///
/// The tool's exit status is discarded, and so is a failure to start it.
#[derive(Debug, Clone)]
pub struct CommandFetcher {
    program: OsString,
}

impl FileDownloader for CommandFetcher {
    fn fetch(&self, url: &str) {
        let _ = Command::new(&self.program).arg(url).status();
    }
}

impl CommandFetcher {
    pub fn new(program: impl Into<OsString>) -> Self {
        CommandFetcher {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &OsStr {
        &self.program
    }
}

impl Default for CommandFetcher {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}
