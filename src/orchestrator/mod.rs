//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责流程调度和资源落盘，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `app` - 应用入口
//! - 管理应用生命周期（初始化、运行）
//! - 解析任务（TOML 任务文件或环境变量配置）
//! - 加载输入文件、写出全部结果文件
//!
//! ### `convert_processor` - 单次转换处理器
//! - 构建答案表，遍历全部题目块
//! - 创建并复用 BlockFlow
//! - 汇总记录和统计信息
//!
//! ## 层次关系
//!
//! ```text
//! app (处理一个转换任务)
//!     ↓
//! convert_processor (处理全部题目块)
//!     ↓
//! workflow::BlockFlow (处理单个题目块)
//!     ↓
//! services (能力层：切分 / 提取 / 判定 / 导出 / 警告)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单一职责**：app 管任务和 I/O，convert_processor 管解析
//! 2. **纯粹核心**：convert_processor 不做任何 I/O，结果可复现
//! 3. **向下依赖**：编排层 → workflow → services

pub mod app;
pub mod convert_processor;

pub use app::App;
pub use convert_processor::{ConvertOutput, ConvertProcessor};
