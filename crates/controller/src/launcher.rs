use std::{io, path::PathBuf};

use libs::child::ChildCommand;

use crate::config::Config;

/// Flag that makes the controller executable show the black screen itself.
pub const CHILD_FLAG: &str = "--child";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchMode {
    /// `<program> --child <INDEX>`
    ChildFlag,
    /// `<program> <INDEX>`
    Positional,
}

#[derive(Debug, Clone)]
pub struct Launcher {
    program: PathBuf,
    mode: LaunchMode,
}

impl Launcher {
    pub fn new(program: impl Into<PathBuf>, mode: LaunchMode) -> Self {
        Self {
            program: program.into(),
            mode,
        }
    }

    /// Re-run the current executable in child mode.
    pub fn current_exe() -> io::Result<Self> {
        Ok(Self::new(std::env::current_exe()?, LaunchMode::ChildFlag))
    }

    pub fn from_config(config: &Config) -> io::Result<Self> {
        match &config.display_bin {
            Some(bin) => Ok(Self::new(bin, LaunchMode::Positional)),
            None => Self::current_exe(),
        }
    }

    pub fn mode(&self) -> LaunchMode {
        self.mode
    }

    pub fn command(&self, index: i64) -> ChildCommand {
        let cmd = ChildCommand::new(&self.program);
        match self.mode {
            LaunchMode::ChildFlag => cmd.arg(CHILD_FLAG).arg(index.to_string()),
            LaunchMode::Positional => cmd.arg(index.to_string()),
        }
    }
}
