use std::ffi::CStr;
use std::time::Duration;

/// Depth the `spawn-chain` binary builds.
pub const DEFAULT_CHAIN_DEPTH: u32 = 3;
/// Each chain link sleeps `depth * CHAIN_DELAY_UNIT` before exec.
pub const CHAIN_DELAY_UNIT: Duration = Duration::from_secs(1);

// Exec ladder targets, keyed by depth
pub const STATIC_TARGET: &str = "/usr/local/bin/static";
pub const DYNAMIC_TARGET: &str = "/usr/local/bin/dynamic";
pub const ALL_IN_ONE_TARGET: &str = "/usr/local/bin/all-in-one";

pub const WRAPPER_LIBRARY_PATH: &str = "/usr/local/lib/libprintf_wrapper.so";
pub const WRAPPER_SYMBOL: &str = "printf_wrapper";

pub const LOCAL_GREETING: &str = "Hello from printf!";
/// Handed to the resolved symbol as its format string
pub const WRAPPER_GREETING: &CStr = c"Hello from printf_wrapper!\n";

/// Default tracing filter when RUST_LOG is unset; stdout is reserved for progress lines.
pub const DEFAULT_LOG_FILTER: &str = "warn";
