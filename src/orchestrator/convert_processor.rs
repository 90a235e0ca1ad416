//! 单次转换处理器 - 编排层
//!
//! 驱动一次完整的文本到记录的转换：构建答案表 → 切分题目块 →
//! 逐块走提取/判定流程 → 收集记录和统计。
//!
//! 对相同输入结果完全确定：没有随机性，也不依赖时间。

use crate::models::{ParseStats, ParsedQuestion};
use crate::services::answer_key::parse_answer_key;
use crate::services::splitter::split_blocks;
use crate::utils::logging::truncate_text;
use crate::workflow::{BlockFlow, BlockOutcome, SkippedBlock};
use tracing::info;

/// 一次转换的完整输出
#[derive(Debug, Clone)]
pub struct ConvertOutput {
    /// 解析出的记录，保持原文中的出现顺序
    pub questions: Vec<ParsedQuestion>,
    /// 汇总统计
    pub stats: ParseStats,
    /// 被跳过的块的诊断信息
    pub skipped_blocks: Vec<SkippedBlock>,
}

/// 单次转换处理器
pub struct ConvertProcessor {
    flow: BlockFlow,
}

impl ConvertProcessor {
    pub fn new(verbose_logging: bool) -> Self {
        Self {
            flow: BlockFlow::new(verbose_logging),
        }
    }

    /// 执行一次转换
    ///
    /// 试题文本切出的每个块按原文顺序处理；格式不符的块被跳过并
    /// 计数，绝不中断整批。完全解析不出块时返回空输出，由调用方
    /// 决定如何提示。
    pub fn process(&self, exam_text: &str, answer_key_text: Option<&str>) -> ConvertOutput {
        let answer_key = parse_answer_key(answer_key_text.unwrap_or(""));
        if !answer_key.is_empty() {
            info!("📖 答案表载入: {} 条", answer_key.len());
        }

        let mut questions = Vec::new();
        let mut stats = ParseStats::default();
        let mut skipped_blocks = Vec::new();

        for block in split_blocks(exam_text) {
            match self.flow.run(&block, &answer_key) {
                BlockOutcome::Parsed(question) => {
                    if question.has_missing_choices() {
                        stats.missing_choices += 1;
                    }
                    if question.correct_answer.is_empty() {
                        stats.missing_correct += 1;
                    }
                    questions.push(question);
                }
                BlockOutcome::Skipped(reason) => {
                    stats.skipped += 1;
                    skipped_blocks.push(SkippedBlock {
                        index: block.index,
                        reason,
                        preview: truncate_text(&block.text, 80),
                    });
                }
            }
        }

        stats.parsed = questions.len();

        info!(
            "✓ 转换完成: 解析 {} 题, 跳过 {} 块",
            stats.parsed, stats.skipped
        );

        ConvertOutput {
            questions,
            stats,
            skipped_blocks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::SkipReason;

    fn processor() -> ConvertProcessor {
        ConvertProcessor::new(false)
    }

    #[test]
    fn test_well_formed_input_single_record() {
        let out = processor().process("1. Q?\nA. x\nB. y\nC. z\nD. w", None);

        assert_eq!(out.questions.len(), 1);
        let q = &out.questions[0];
        assert_eq!(q.question, "Q?");
        assert_eq!(q.choice_a, "x");
        assert_eq!(q.choice_d, "w");
        assert_eq!(q.correct_answer, "");
        assert_eq!(out.stats.parsed, 1);
        assert_eq!(out.stats.missing_correct, 1);
        assert_eq!(out.stats.missing_choices, 0);
    }

    #[test]
    fn test_order_preserved_not_sorted() {
        // 题号乱序时保持物理顺序
        let text = "3. 丙题\nA. x\n1. 甲题\nA. x\n2. 乙题\nA. x";

        let out = processor().process(text, None);

        let questions: Vec<&str> = out.questions.iter().map(|q| q.question.as_str()).collect();
        assert_eq!(questions, vec!["丙题", "甲题", "乙题"]);
    }

    #[test]
    fn test_skipped_blocks_counted_and_reported() {
        let out = processor().process("1. 正常题\nA. x\n5. 1999\n2. 又一题\nA. y", None);

        assert_eq!(out.stats.parsed, 2);
        assert_eq!(out.stats.skipped, 1);
        assert_eq!(out.skipped_blocks.len(), 1);
        assert_eq!(out.skipped_blocks[0].reason, SkipReason::NumericOnly);
        assert_eq!(out.skipped_blocks[0].index, 2);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let out = processor().process("", None);

        assert!(out.questions.is_empty());
        assert_eq!(out.stats, ParseStats::default());
    }

    #[test]
    fn test_garbage_input_yields_empty_output() {
        let out = processor().process("没有任何题号模式的文本\n第二行", None);

        assert!(out.questions.is_empty());
        // 唯一的块因缺题号被跳过
        assert_eq!(out.stats.skipped, 1);
    }

    #[test]
    fn test_idempotent_for_same_input() {
        let text = "1. Q?\nA. x\nB. y*\nC. z";
        let key = Some("1:C");

        let first = processor().process(text, key);
        let second = processor().process(text, key);

        assert_eq!(first.questions, second.questions);
        assert_eq!(first.stats, second.stats);
    }

    #[test]
    fn test_missing_choices_counted() {
        let out = processor().process("1. Q?\nA. x\nB. y", None);

        assert_eq!(out.stats.parsed, 1);
        assert_eq!(out.stats.missing_choices, 1);
    }
}
