//! 原始表重整 - 业务能力层
//!
//! 把"题干 + 四个选项 + 正确答案"的原始表转换为题库导入格式：
//! 去掉题干前的编号、选项用 | 拼接、补上类别和固定字段、生成ID。

use crate::error::ReshapeError;
use crate::models::{ImportRecord, ParsedQuestion};
use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// 题干开头残留的"数字. "编号
static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*").expect("编号正则不合法"));

/// 重整服务
pub struct ReshapeService {
    category: String,
    blank_ids: bool,
}

impl ReshapeService {
    pub fn new(category: impl Into<String>, blank_ids: bool) -> Self {
        Self {
            category: category.into(),
            blank_ids,
        }
    }

    /// 校验原始表
    ///
    /// 导入方要求所有字段非空，且正确答案与四个选项之一完全一致。
    /// 只报第一处问题，行号从1开始。
    pub fn validate(&self, rows: &[ParsedQuestion]) -> Result<(), ReshapeError> {
        for (idx, row) in rows.iter().enumerate() {
            let row_number = idx + 1;

            for (column, value) in [
                ("Question", &row.question),
                ("answer choice A", &row.choice_a),
                ("answer choice B", &row.choice_b),
                ("answer choice C", &row.choice_c),
                ("answer choice D", &row.choice_d),
                ("Correct Answer", &row.correct_answer),
            ] {
                if value.trim().is_empty() {
                    return Err(ReshapeError::EmptyCell {
                        row: row_number,
                        column,
                    });
                }
            }

            let correct = row.correct_answer.trim();
            let matches_choice = [
                row.choice_a.trim(),
                row.choice_b.trim(),
                row.choice_c.trim(),
                row.choice_d.trim(),
            ]
            .contains(&correct);

            if !matches_choice {
                return Err(ReshapeError::AnswerMismatch { row: row_number });
            }
        }

        Ok(())
    }

    /// 转换为导入格式
    ///
    /// ID 以一个随机六位数为基准逐行递增；blank_ids 模式下 ID 列
    /// 全部留空（表头保留），此时转换是确定性的。
    pub fn transform(&self, rows: &[ParsedQuestion]) -> Vec<ImportRecord> {
        let base_id: Option<u64> = if self.blank_ids {
            None
        } else {
            Some(rand::rng().random_range(100_000..=999_999))
        };

        debug!(
            "重整 {} 行, 类别: {}, 基准ID: {:?}",
            rows.len(),
            self.category,
            base_id
        );

        rows.iter()
            .enumerate()
            .map(|(idx, row)| {
                let title = clean_question_text(&row.question);
                let options = [
                    row.choice_a.trim(),
                    row.choice_b.trim(),
                    row.choice_c.trim(),
                    row.choice_d.trim(),
                ]
                .join("|");

                ImportRecord {
                    id: base_id
                        .map(|base| (base + idx as u64).to_string())
                        .unwrap_or_default(),
                    title: title.clone(),
                    category: self.category.clone(),
                    question_type: "single-choice".to_string(),
                    post_content: title,
                    status: "publish".to_string(),
                    menu_order: idx + 1,
                    options,
                    answer: row.correct_answer.trim().to_string(),
                }
            })
            .collect()
    }
}

/// 去掉题干开头残留的"数字. "编号
pub fn clean_question_text(text: &str) -> String {
    LEADING_NUMBER.replace(text.trim(), "").to_string()
}
