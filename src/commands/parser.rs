//! CLI 命令行参数解析
//!
//! 两个程序都不接受参数，clap 只负责 --help / --version 和拒绝多余参数

use crate::error::FAILURE_EXIT_CODE;
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;

/// Fork a chain of three processes; each link replaces itself with a fixed program.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "spawn-chain", version)]
pub struct SpawnChainCli {}

/// Load libprintf_wrapper.so at runtime and call printf_wrapper from it.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "dyn-invoke", version)]
pub struct DynInvokeCli {}

/// What the binary should do after argument parsing
#[derive(Debug, PartialEq, Eq)]
pub enum ParseOutcome<T> {
    Run(T),
    /// Help or version text was requested; print it and exit 0
    Display(String),
    /// Usage error; print it to stderr and exit with `code`
    Reject { message: String, code: u8 },
}

/// Parse `args`, mapping clap's own exit codes onto 0 and 1.
pub fn parse_args<T, I, A>(args: I) -> ParseOutcome<T>
where
    T: Parser,
    I: IntoIterator<Item = A>,
    A: Into<OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => ParseOutcome::Run(cli),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                ParseOutcome::Display(err.to_string())
            }
            _ => ParseOutcome::Reject {
                message: err.to_string(),
                code: FAILURE_EXIT_CODE,
            },
        },
    }
}
