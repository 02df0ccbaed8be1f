//! Linear process chain with a depth-keyed exec ladder
//!
//! `spawn_chain(n)` forks one child per depth. Every child first builds the rest
//! of the chain below it, so the innermost link exists before any link acts.
//! Once its own child has been reaped, a link sleeps `depth` delay units and
//! replaces itself with the ladder target for its depth. Parents report
//! completion only after the direct child is gone, so goodbyes arrive
//! innermost first.

use crate::config::CHAIN_DELAY_UNIT;
use crate::core::ladder::ExecLadder;
use crate::error::{ChainError, ChainResult};
use crate::platform::{ForkRole, Pid, ProcessOps};
use std::time::Duration;
use tracing::{debug, warn};

/// How a `spawn_chain` call handed control back to its caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainFlow {
    /// Base case, or a parent whose child has been reaped. The caller carries on.
    Returned,
    /// The link at this depth had no exec target and is done. Stack frames above
    /// belong to ancestors (inherited across fork) and must not run in this
    /// process.
    Finished(u32),
}

pub struct ChainController<P: ProcessOps> {
    ops: P,
    ladder: ExecLadder,
    delay_unit: Duration,
}

impl<P: ProcessOps> ChainController<P> {
    pub fn new(ops: P) -> Self {
        Self::with_ladder(ops, ExecLadder::default())
    }

    pub fn with_ladder(ops: P, ladder: ExecLadder) -> Self {
        Self {
            ops,
            ladder,
            delay_unit: CHAIN_DELAY_UNIT,
        }
    }

    pub fn with_delay_unit(mut self, delay_unit: Duration) -> Self {
        self.delay_unit = delay_unit;
        self
    }

    pub fn ladder(&self) -> &ExecLadder {
        &self.ladder
    }

    pub fn delay_unit(&self) -> Duration {
        self.delay_unit
    }

    /// Build a chain of `depth` descendants below the calling process.
    ///
    /// Returns in the root (and in every parent) once its direct child has been
    /// reaped. A child that execs successfully never returns; one whose exec
    /// fails gets `ChainError::ImageReplacement` and must exit with status 1.
    pub fn spawn_chain(&self, depth: u32) -> ChainResult<ChainFlow> {
        if depth == 0 {
            return Ok(ChainFlow::Returned);
        }

        let role = self
            .ops
            .fork()
            .map_err(|source| ChainError::ResourceExhaustion { depth, source })?;

        match role {
            ForkRole::Parent { child } => {
                self.retire(depth, child);
                Ok(ChainFlow::Returned)
            }
            ForkRole::Child => {
                if let ChainFlow::Finished(link) = self.spawn_chain(depth - 1)? {
                    return Ok(ChainFlow::Finished(link));
                }
                self.ops.pause(self.delay_unit.saturating_mul(depth));
                self.climb(depth)
            }
        }
    }

    fn retire(&self, depth: u32, child: Pid) {
        // The status is only logged; a failed child does not fail its parent
        match self.ops.wait(child) {
            Ok(exit) => debug!(depth, pid = %child, %exit, "child reaped"),
            Err(errno) => warn!(depth, pid = %child, %errno, "waitpid failed"),
        }
        println!("Goodbye from parent {}!", depth);
    }

    fn climb(&self, depth: u32) -> ChainResult<ChainFlow> {
        let Some(target) = self.ladder.target_for(depth) else {
            debug!(depth, "no exec target for depth");
            return Ok(ChainFlow::Finished(depth));
        };

        println!("Child {} calling {}...", depth, target.name);
        debug!(depth, path = %target.path.display(), "replacing process image");

        match self.ops.exec(target.path()) {
            Ok(never) => match never {},
            Err(source) => Err(ChainError::ImageReplacement {
                depth,
                path: target.path.clone(),
                source,
            }),
        }
    }
}
