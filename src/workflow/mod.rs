//! 流程层（Workflow Layer）
//!
//! 定义"一个题目块"的完整处理流程，只依赖业务能力（services），
//! 不持有资源，也不出现块的集合。

pub mod block_flow;

pub use block_flow::{BlockFlow, BlockOutcome, SkippedBlock};
