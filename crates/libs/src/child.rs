use std::{
    fmt, io,
    path::{Path, PathBuf},
    process::{Child, Command, ExitStatus},
    thread,
    time::Duration,
};

use sysinfo::{Pid, ProcessesToUpdate, Signal, System};
use thiserror::Error;

/// Number of liveness checks spread over the terminate grace period.
const TERMINATE_POLLS: u32 = 10;

#[derive(Debug, Error)]
pub enum ChildError {
    #[error("a child is already running (pid={pid})")]
    AlreadyRunning { pid: u32 },

    #[error("failed to spawn '{}': {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to stop child (pid={pid}): {source}")]
    Terminate {
        pid: u32,
        #[source]
        source: io::Error,
    },
}

/// Program plus arguments used to start the child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildCommand {
    program: PathBuf,
    args: Vec<String>,
}

impl ChildCommand {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd
    }
}

impl fmt::Display for ChildCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Owns at most one child process.
///
/// A running child is terminated when the supervisor is dropped, so the
/// fullscreen window never outlives the controller that opened it.
pub struct ChildSupervisor {
    child: Option<Child>,
    grace: Duration,
}

impl ChildSupervisor {
    pub fn new(grace: Duration) -> Self {
        Self { child: None, grace }
    }

    pub fn pid(&self) -> Option<u32> {
        self.child.as_ref().map(Child::id)
    }

    /// Reaps an exited child like `poll`, discarding its status.
    pub fn is_running(&mut self) -> bool {
        self.poll();
        self.child.is_some()
    }

    pub fn spawn(&mut self, command: &ChildCommand) -> Result<u32, ChildError> {
        self.poll();
        if let Some(pid) = self.pid() {
            return Err(ChildError::AlreadyRunning { pid });
        }

        let child = command
            .to_command()
            .spawn()
            .map_err(|source| ChildError::Spawn {
                program: command.program.clone(),
                source,
            })?;
        let pid = child.id();
        tracing::info!(pid, command = %command, "child started");
        self.child = Some(child);
        Ok(pid)
    }

    /// Non-blocking check. Returns the exit status once the child has gone
    /// away and releases the handle.
    pub fn poll(&mut self) -> Option<ExitStatus> {
        let child = self.child.as_mut()?;
        match child.try_wait() {
            Ok(Some(status)) => {
                tracing::info!(pid = child.id(), %status, "child exited");
                self.child = None;
                Some(status)
            }
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(pid = child.id(), error = %err, "could not query child");
                None
            }
        }
    }

    /// Ask the child to exit, then force-kill it once the grace period runs out.
    pub fn terminate(&mut self) -> Result<Option<ExitStatus>, ChildError> {
        let Some(mut child) = self.child.take() else {
            return Ok(None);
        };
        let pid = child.id();

        if !request_terminate(pid) {
            tracing::debug!(pid, "polite terminate not delivered, will kill");
        }

        let step = self.grace / TERMINATE_POLLS;
        for _ in 0..TERMINATE_POLLS {
            match child.try_wait() {
                Ok(Some(status)) => {
                    tracing::info!(pid, %status, "child terminated");
                    return Ok(Some(status));
                }
                Ok(None) => thread::sleep(step),
                Err(source) => {
                    // never leave a live child behind once the handle is gone
                    if let Err(err) = force_kill(&mut child) {
                        tracing::error!(pid, error = %err, "kill after failed wait");
                    }
                    return Err(ChildError::Terminate { pid, source });
                }
            }
        }

        tracing::warn!(pid, grace = ?self.grace, "child ignored terminate, killing");
        let status =
            force_kill(&mut child).map_err(|source| ChildError::Terminate { pid, source })?;
        Ok(Some(status))
    }
}

fn force_kill(child: &mut Child) -> io::Result<ExitStatus> {
    // kill() fails with InvalidInput if the child exited in the meantime.
    if let Err(err) = child.kill() {
        if err.kind() != io::ErrorKind::InvalidInput {
            return Err(err);
        }
    }
    child.wait()
}

impl Drop for ChildSupervisor {
    fn drop(&mut self) {
        if let Err(err) = self.terminate() {
            tracing::error!(error = %err, "failed to stop child on shutdown");
        }
    }
}

// SIGTERM on unix; `None` from sysinfo means the signal is unsupported here.
fn request_terminate(pid: u32) -> bool {
    let pid = Pid::from_u32(pid);
    let mut system = System::new();
    system.refresh_processes(ProcessesToUpdate::Some(&[pid]), true);
    system
        .process(pid)
        .and_then(|process| process.kill_with(Signal::Term))
        .unwrap_or(false)
}
