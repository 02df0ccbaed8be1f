use execladder::commands::{parse_args, ParseOutcome, SpawnChainCli};
use execladder::config::DEFAULT_CHAIN_DEPTH;
use execladder::platform::unix::UnixProcessOps;
use execladder::utils::logger::init_logger;
use execladder::{ChainController, ChainFlow};
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    match parse_args::<SpawnChainCli, _, _>(std::env::args_os()) {
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

    // SAFETY: no threads have been started; the logger does not spawn any
    let ops = unsafe { UnixProcessOps::new() };
    let controller = ChainController::new(ops);

    // Every process of the chain returns here unless its exec succeeded
    match controller.spawn_chain(DEFAULT_CHAIN_DEPTH) {
        Ok(ChainFlow::Returned) => ExitCode::SUCCESS,
        Ok(ChainFlow::Finished(depth)) => {
            debug!(depth, "link finished without exec target");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err);
            debug!(category = err.category().display_name(), "{}", err.user_message());
            ExitCode::from(err.exit_code())
        }
    }
}
