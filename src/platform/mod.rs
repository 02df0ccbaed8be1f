//! Process primitives used by the chain controller
//!
//! The controller only ever talks to [`ProcessOps`]; `unix::UnixProcessOps`
//! is the real implementation and tests substitute a mock.

pub mod unix;

pub use nix::sys::signal::Signal;
pub use nix::unistd::Pid;

use nix::sys::wait::WaitStatus;
use std::convert::Infallible;
use std::fmt;
use std::path::Path;
use std::time::Duration;

/// Which side of a fork the caller is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForkRole {
    Parent { child: Pid },
    Child,
}

/// How a reaped child ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildExit {
    Exited(i32),
    Signaled(Signal),
    Other(String),
}

impl From<WaitStatus> for ChildExit {
    fn from(status: WaitStatus) -> Self {
        match status {
            WaitStatus::Exited(_, code) => ChildExit::Exited(code),
            WaitStatus::Signaled(_, signal, _) => ChildExit::Signaled(signal),
            other => ChildExit::Other(format!("{:?}", other)),
        }
    }
}

impl fmt::Display for ChildExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildExit::Exited(code) => write!(f, "exited with status {}", code),
            ChildExit::Signaled(signal) => write!(f, "killed by {}", signal),
            ChildExit::Other(status) => write!(f, "ended with {}", status),
        }
    }
}

impl ChildExit {
    pub fn success(&self) -> bool {
        matches!(self, ChildExit::Exited(0))
    }
}

/// OS operations the chain controller is built on
#[cfg_attr(test, mockall::automock)]
pub trait ProcessOps {
    /// Duplicate the current process.
    fn fork(&self) -> nix::Result<ForkRole>;

    /// Block until `child` terminates and reap it.
    fn wait(&self, child: Pid) -> nix::Result<ChildExit>;

    /// Unconditional timed suspension.
    fn pause(&self, duration: Duration);

    /// Replace the process image with `path`. Only returns on failure.
    fn exec(&self, path: &Path) -> nix::Result<Infallible>;
}
