//! Depth-keyed exec targets
//!
//! Each depth maps to at most one target. A failed exec never moves on to the
//! target of another depth.

use crate::config::{ALL_IN_ONE_TARGET, DYNAMIC_TARGET, STATIC_TARGET};
use std::path::{Path, PathBuf};

/// One rung of the ladder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecTarget {
    pub depth: u32,
    pub name: String,
    pub path: PathBuf,
}

impl ExecTarget {
    pub fn new(depth: u32, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { depth, name, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecLadder {
    targets: Vec<ExecTarget>,
}

impl Default for ExecLadder {
    fn default() -> Self {
        Self::new()
            .with_target(3, STATIC_TARGET)
            .with_target(2, DYNAMIC_TARGET)
            .with_target(1, ALL_IN_ONE_TARGET)
    }
}

impl ExecLadder {
    /// An empty ladder; every depth is a no-op
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
        }
    }

    /// Adds or replaces the target for `depth`
    pub fn with_target(mut self, depth: u32, path: impl Into<PathBuf>) -> Self {
        self.targets.retain(|target| target.depth != depth);
        self.targets.push(ExecTarget::new(depth, path));
        self
    }

    /// Exact match on depth, never a range
    pub fn target_for(&self, depth: u32) -> Option<&ExecTarget> {
        self.targets.iter().find(|target| target.depth == depth)
    }

    pub fn targets(&self) -> impl Iterator<Item = &ExecTarget> {
        self.targets.iter()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
