//! execladder Library
//!
//! A process chain whose links replace themselves through a depth-keyed exec
//! ladder, and a late-bound call into a shared library symbol.

#![cfg(unix)]

pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod invoker;
pub mod platform;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::chain::{ChainController, ChainFlow};
pub use crate::core::ladder::{ExecLadder, ExecTarget};
pub use error::{ChainError, ErrorCategory, InvokerError};
pub use invoker::DynamicSymbolInvoker;
pub use platform::{ChildExit, ForkRole, ProcessOps};
