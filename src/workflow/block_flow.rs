//! 题目块处理流程 - 流程层
//!
//! 核心职责：定义"一个题目块"的完整处理流程
//!
//! 流程顺序：
//! 1. 提取题干和选项
//! 2. 判定正确答案（行内标记优先于答案表）
//! 3. 装配记录，或带原因跳过

use crate::models::{AnswerKey, ParsedQuestion, QuestionBlock};
use crate::services::extractor::{extract_question, SkipReason};
use crate::services::resolver::resolve_correct_answer;
use crate::utils::logging::truncate_text;
use tracing::{debug, warn};

/// 单个块的处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockOutcome {
    /// 解析成功
    Parsed(ParsedQuestion),
    /// 跳过（格式不符）
    Skipped(SkipReason),
}

/// 被跳过的块的诊断信息，供警告文件使用
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedBlock {
    /// 块序号（从1开始）
    pub index: usize,
    /// 跳过原因
    pub reason: SkipReason,
    /// 块内容预览（截断）
    pub preview: String,
}

/// 题目块处理流程
///
/// - 编排单个块的提取和答案判定
/// - 不持有任何资源，不出现块的集合
/// - 任何块内的格式问题都被就地吸收，绝不向外抛错
pub struct BlockFlow {
    verbose_logging: bool,
}

impl BlockFlow {
    pub fn new(verbose_logging: bool) -> Self {
        Self { verbose_logging }
    }

    /// 处理单个题目块
    pub fn run(&self, block: &QuestionBlock, answer_key: &AnswerKey) -> BlockOutcome {
        match extract_question(block) {
            Ok(extracted) => {
                let correct = resolve_correct_answer(
                    &extracted.number,
                    &extracted.choices,
                    &extracted.inline_correct,
                    answer_key,
                );

                if self.verbose_logging {
                    debug!(
                        "[块 {}] 题号 {} | 题干: {} | 正确答案: {}",
                        block.index,
                        extracted.number,
                        truncate_text(&extracted.question, 40),
                        if correct.is_empty() { "未确定" } else { correct.as_str() }
                    );
                }

                BlockOutcome::Parsed(ParsedQuestion::assemble(extracted, correct))
            }
            Err(reason) => {
                warn!(
                    "[块 {}] ⚠️ 跳过: {} | 内容: {}",
                    block.index,
                    reason,
                    truncate_text(&block.text, 60)
                );
                BlockOutcome::Skipped(reason)
            }
        }
    }
}
