//! # Exam Convert
//!
//! 把松散格式的试题文本转换为结构化题目记录和导入 CSV 的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 数据层（Models）
//! - `models/` - 数据结构和加载器
//! - `ParsedQuestion` / `AnswerKey` / `ImportRecord` - 核心记录类型
//! - `loaders/` - TOML 任务文件和文本输入的加载
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个块/单张表
//! - `splitter` - 按题号边界切分题目块
//! - `extractor` - 块内提取题干、选项和星号标记
//! - `resolver` - 行内标记与答案表的优先级判定
//! - `answer_key` - 答案表文本解析
//! - `reshape` - 原始表转导入格式
//! - `csv_export` - CSV 落盘能力
//! - `warn_writer` - 写 warn.txt 能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一个题目块"的完整处理流程
//! - `BlockFlow` - 流程编排（提取 → 判定 → 装配/跳过）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/convert_processor` - 单次转换处理器，遍历块并汇总
//! - `orchestrator/app` - 应用入口，任务解析和结果落盘

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{AnswerKey, ChoiceSet, ImportRecord, ParseStats, ParsedQuestion};
pub use orchestrator::{App, ConvertOutput, ConvertProcessor};
pub use services::SkipReason;
pub use workflow::{BlockFlow, BlockOutcome};
