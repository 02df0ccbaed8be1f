use super::{ChildExit, ForkRole, Pid, ProcessOps};
use nix::errno::Errno;
use nix::sys::wait::waitpid;
use nix::unistd::{execv, fork, ForkResult};
use std::convert::Infallible;
use std::ffi::{CStr, CString};
use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;
use std::thread;
use std::time::Duration;
use tracing::debug;

/// [`ProcessOps`] backed by fork(2), waitpid(2) and execv(3)
#[derive(Debug)]
pub struct UnixProcessOps {
    _private: (),
}

impl UnixProcessOps {
    /// # Safety
    ///
    /// The caller must be single-threaded for as long as this value is used to
    /// fork. After fork only the calling thread survives in the child, so a
    /// lock held by another thread (allocator, stdio) would never be released.
    pub unsafe fn new() -> Self {
        Self { _private: () }
    }
}

impl ProcessOps for UnixProcessOps {
    fn fork(&self) -> nix::Result<ForkRole> {
        // Anything still buffered would otherwise be written by both processes
        let _ = io::stdout().flush();

        // SAFETY: single-threaded use is guaranteed by the constructor contract
        match unsafe { fork() }? {
            ForkResult::Parent { child } => {
                debug!(pid = %child, "forked child");
                Ok(ForkRole::Parent { child })
            }
            ForkResult::Child => Ok(ForkRole::Child),
        }
    }

    fn wait(&self, child: Pid) -> nix::Result<ChildExit> {
        loop {
            match waitpid(child, None) {
                Err(Errno::EINTR) => continue,
                result => return result.map(ChildExit::from),
            }
        }
    }

    fn pause(&self, duration: Duration) {
        thread::sleep(duration);
    }

    fn exec(&self, path: &Path) -> nix::Result<Infallible> {
        let c_path = CString::new(path.as_os_str().as_bytes()).map_err(|_| Errno::EINVAL)?;
        let _ = io::stdout().flush();

        // Targets take no arguments
        let argv: [&CStr; 0] = [];
        execv(&c_path, &argv)
    }
}
