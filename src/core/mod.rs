//! 核心逻辑模块
//!
//! 进程链构建与 exec 阶梯

pub mod chain;
pub mod ladder;
