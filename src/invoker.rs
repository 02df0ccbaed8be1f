//! Late-bound call into a shared library
//!
//! The library is opened with lazy binding, a single symbol is looked up and
//! called as `int (*)(const char *, ...)`, then the handle is released.
//! Both steps are checked through the loader's own error state (`dlerror`),
//! which `libloading` polls after `dlopen` and after `dlsym`.

use crate::config::{LOCAL_GREETING, WRAPPER_GREETING, WRAPPER_LIBRARY_PATH, WRAPPER_SYMBOL};
use crate::error::InvokerError;
use libc::{c_char, c_int, c_void};
use libloading::os::unix::{Library, RTLD_LAZY};
use std::ffi::CStr;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Signature expected of the resolved symbol
pub type PrintfWrapper = unsafe extern "C" fn(*const c_char, ...) -> c_int;

#[derive(Debug, Clone)]
pub struct DynamicSymbolInvoker {
    library_path: PathBuf,
    symbol: String,
    message: &'static CStr,
}

impl Default for DynamicSymbolInvoker {
    fn default() -> Self {
        Self::new(WRAPPER_LIBRARY_PATH, WRAPPER_SYMBOL)
    }
}

impl DynamicSymbolInvoker {
    pub fn new(library_path: impl Into<PathBuf>, symbol: impl Into<String>) -> Self {
        Self {
            library_path: library_path.into(),
            symbol: symbol.into(),
            message: WRAPPER_GREETING,
        }
    }

    pub fn library_path(&self) -> &Path {
        &self.library_path
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Open, resolve, call, release.
    pub fn run(&self) -> Result<(), InvokerError> {
        let library = self.open()?;
        let wrapper = self.resolve(&library)?;

        println!("{}", LOCAL_GREETING);
        // SAFETY: the symbol is non-null and the library contract says it has the
        // printf-like signature; the format string has no conversions.
        unsafe {
            wrapper(self.message.as_ptr());
            // The wrapper writes through C stdio, which Rust does not flush
            libc::fflush(std::ptr::null_mut());
        }

        if let Err(err) = library.close() {
            warn!(path = %self.library_path.display(), %err, "dlclose failed");
        }
        Ok(())
    }

    fn open(&self) -> Result<Library, InvokerError> {
        // SAFETY: running the library's initialisers is the point of the exercise
        let library = unsafe { Library::open(Some(&self.library_path), RTLD_LAZY) }.map_err(
            |err| InvokerError::LibraryLoad {
                path: self.library_path.clone(),
                detail: err.to_string(),
            },
        )?;
        debug!(path = %self.library_path.display(), "library opened");
        Ok(library)
    }

    fn resolve(&self, library: &Library) -> Result<PrintfWrapper, InvokerError> {
        // A null address is a valid dlsym result; failure is whatever dlerror reports
        let raw = unsafe { library.get::<*mut c_void>(self.symbol.as_bytes()) }
            .map_err(|err| InvokerError::SymbolResolution {
                symbol: self.symbol.clone(),
                detail: err.to_string(),
            })?
            .into_raw();

        if raw.is_null() {
            return Err(InvokerError::SymbolResolution {
                symbol: self.symbol.clone(),
                detail: format!("{}: symbol resolves to a null address", self.symbol),
            });
        }
        debug!(symbol = %self.symbol, address = ?raw, "symbol resolved");

        // SAFETY: non-null code address with the documented signature
        Ok(unsafe { std::mem::transmute::<*mut c_void, PrintfWrapper>(raw) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_wrapper_library() {
        let invoker = DynamicSymbolInvoker::default();
        assert_eq!(
            invoker.library_path(),
            Path::new("/usr/local/lib/libprintf_wrapper.so")
        );
        assert_eq!(invoker.symbol(), "printf_wrapper");
    }

    #[test]
    fn missing_library_reports_loader_diagnostic() {
        let invoker = DynamicSymbolInvoker::new("/nonexistent/libnothing.so", "printf_wrapper");
        match invoker.run() {
            Err(InvokerError::LibraryLoad { path, detail }) => {
                assert_eq!(path, PathBuf::from("/nonexistent/libnothing.so"));
                assert!(detail.contains("/nonexistent/libnothing.so"), "{}", detail);
            }
            other => panic!("expected LibraryLoad, got {:?}", other),
        }
    }

    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    #[test]
    fn unknown_symbol_is_a_resolution_failure() {
        let invoker = DynamicSymbolInvoker::new("libc.so.6", "execladder_no_such_symbol");
        match invoker.run() {
            Err(InvokerError::SymbolResolution { symbol, detail }) => {
                assert_eq!(symbol, "execladder_no_such_symbol");
                assert!(detail.contains("execladder_no_such_symbol"), "{}", detail);
            }
            other => panic!("expected SymbolResolution, got {:?}", other),
        }
    }

    #[cfg(all(target_os = "linux", target_env = "gnu"))]
    #[test]
    fn printf_from_libc_stands_in_for_wrapper() {
        let invoker = DynamicSymbolInvoker::new("libc.so.6", "printf");
        assert_eq!(invoker.run(), Ok(()));
    }
}
