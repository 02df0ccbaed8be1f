pub mod parser;

pub use parser::{parse_args, DynInvokeCli, ParseOutcome, SpawnChainCli};
