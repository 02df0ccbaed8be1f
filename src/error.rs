//! Error types for the chain controller and the symbol invoker
//!
//! Every failure here is terminal for the process that hits it: the binaries
//! print the diagnostic to stderr and exit with status 1.

use nix::errno::Errno;
use std::path::PathBuf;
use thiserror::Error;

/// Exit status used for every failure.
pub const FAILURE_EXIT_CODE: u8 = 1;

/// Failures raised while building or driving the process chain
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChainError {
    /// fork() failed, usually because the process table or memory is exhausted
    #[error("fork failed: {source}")]
    ResourceExhaustion { depth: u32, source: Errno },

    /// execv() returned, so the image was not replaced
    #[error("execv failed: {source}")]
    ImageReplacement {
        depth: u32,
        path: PathBuf,
        source: Errno,
    },
}

/// Failures raised while loading a library and resolving its symbol
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InvokerError {
    /// The loader's diagnostic is the whole message, as dlerror() reports it
    #[error("{detail}")]
    LibraryLoad { path: PathBuf, detail: String },

    #[error("{detail}")]
    SymbolResolution { symbol: String, detail: String },
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Resource,
    Process,
    Loader,
}

impl ErrorCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            ErrorCategory::Resource => "Resource",
            ErrorCategory::Process => "Process",
            ErrorCategory::Loader => "Loader",
        }
    }
}

impl ChainError {
    /// Get error category
    pub fn category(&self) -> ErrorCategory {
        match self {
            ChainError::ResourceExhaustion { .. } => ErrorCategory::Resource,
            ChainError::ImageReplacement { .. } => ErrorCategory::Process,
        }
    }

    /// Depth of the chain link that failed
    pub fn depth(&self) -> u32 {
        match self {
            ChainError::ResourceExhaustion { depth, .. }
            | ChainError::ImageReplacement { depth, .. } => *depth,
        }
    }

    /// Get user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            ChainError::ResourceExhaustion { depth, source } => {
                format!("Could not create child at depth {}: {}", depth, source)
            }
            ChainError::ImageReplacement {
                depth,
                path,
                source,
            } => format!(
                "Child {} could not run {}: {}",
                depth,
                path.display(),
                source
            ),
        }
    }

    pub fn exit_code(&self) -> u8 {
        FAILURE_EXIT_CODE
    }
}

impl InvokerError {
    /// Get error category
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Loader
    }

    /// Get user-friendly message
    pub fn user_message(&self) -> String {
        match self {
            InvokerError::LibraryLoad { path, detail } => {
                format!("Could not load {}: {}", path.display(), detail)
            }
            InvokerError::SymbolResolution { symbol, detail } => {
                format!("Could not resolve '{}': {}", symbol, detail)
            }
        }
    }

    pub fn exit_code(&self) -> u8 {
        FAILURE_EXIT_CODE
    }
}

/// Result type alias for the chain controller
pub type ChainResult<T> = Result<T, ChainError>;
