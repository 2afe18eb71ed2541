use std::{fmt, time::Duration};

use libs::child::{ChildCommand, ChildError, ChildSupervisor};

use crate::launcher::Launcher;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Closed,
    Running { pid: u32 },
    Failed(String),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Closed => write!(f, "Status: closed"),
            Status::Running { pid } => write!(f, "Status: running (pid={pid})"),
            Status::Failed(msg) => write!(f, "Failed to start: {msg}"),
        }
    }
}

/// Opens and closes the black screen child on behalf of the UI.
pub struct Controller {
    launcher: Launcher,
    supervisor: ChildSupervisor,
    status: Status,
}

impl Controller {
    pub fn new(launcher: Launcher, grace: Duration) -> Self {
        Self {
            launcher,
            supervisor: ChildSupervisor::new(grace),
            status: Status::Closed,
        }
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn command(&self, index: i64) -> ChildCommand {
        self.launcher.command(index)
    }

    pub fn launcher(&self) -> &Launcher {
        &self.launcher
    }

    /// Goes through `poll` so an exit seen here also resets the status.
    pub fn is_running(&mut self) -> bool {
        self.poll();
        self.supervisor.pid().is_some()
    }

    pub fn can_open(&mut self) -> bool {
        !self.is_running()
    }

    pub fn can_close(&mut self) -> bool {
        self.is_running()
    }

    /// Start the black screen on `index`. Refuses while one is already open.
    pub fn open(&mut self, index: i64) -> Result<u32, ChildError> {
        let command = self.launcher.command(index);
        match self.supervisor.spawn(&command) {
            Ok(pid) => {
                self.status = Status::Running { pid };
                Ok(pid)
            }
            Err(err @ ChildError::AlreadyRunning { .. }) => {
                tracing::debug!(error = %err, "open ignored");
                Err(err)
            }
            Err(err) => {
                tracing::error!(error = %err, command = %command, "failed to start black screen");
                self.status = Status::Failed(err.to_string());
                Err(err)
            }
        }
    }

    pub fn close(&mut self) {
        if let Err(err) = self.supervisor.terminate() {
            tracing::error!(error = %err, "failed to close black screen");
        }
        self.status = Status::Closed;
    }

    /// Notice a child that went away by itself, e.g. ESC was pressed.
    pub fn poll(&mut self) {
        if let Some(status) = self.supervisor.poll() {
            tracing::info!(%status, "black screen closed");
            self.status = Status::Closed;
        }
    }
}
