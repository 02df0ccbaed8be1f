use execladder::commands::{parse_args, DynInvokeCli, ParseOutcome};
use execladder::utils::logger::init_logger;
use execladder::DynamicSymbolInvoker;
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    match parse_args::<DynInvokeCli, _, _>(std::env::args_os()) {
        ParseOutcome::Run(_) => {}
        ParseOutcome::Display(text) => {
            print!("{}", text);
            return ExitCode::SUCCESS;
        }
        ParseOutcome::Reject { message, code } => {
            eprint!("{}", message);
            return ExitCode::from(code);
        }
    }

    if let Err(err) = init_logger(None) {
        eprintln!("Failed to initialize logger: {}", err);
    }

    match DynamicSymbolInvoker::default().run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            debug!(category = err.category().display_name(), "{}", err.user_message());
            ExitCode::from(err.exit_code())
        }
    }
}
