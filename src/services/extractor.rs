//! 题目提取 - 业务能力层
//!
//! 在单个题目块内提取题干和最多四个字母选项，识别行内的
//! 星号正确答案标记。单行扫描，边界优先级固定：
//! 下一个顶格"字母."行 > 下一个顶格"数字."行 > 块结束。

use crate::models::{ChoiceSet, ExtractedQuestion, QuestionBlock};
use crate::services::splitter::{digit_dot_prefix, letter_dot_prefix};
use std::fmt;

/// 块被跳过的原因
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// 块不以"题号."开头
    NoQuestionMatch,
    /// 题干只有数字，多半是年份之类被误切进来的
    NumericOnly,
    /// 题干为空
    EmptyQuestion,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoQuestionMatch => write!(f, "块不以题号开头"),
            SkipReason::NumericOnly => write!(f, "题干只含数字"),
            SkipReason::EmptyQuestion => write!(f, "题干为空"),
        }
    }
}

/// 提取单个题目块
///
/// 任何格式问题只会让这个块被跳过并带回原因，不会让整批失败。
pub fn extract_question(block: &QuestionBlock) -> Result<ExtractedQuestion, SkipReason> {
    let mut lines = block.text.lines();
    let first_line = lines.next().unwrap_or("");

    let (number, after_number) =
        digit_dot_prefix(first_line).ok_or(SkipReason::NoQuestionMatch)?;

    // 题干：题号之后的内容，到第一个顶格"字母."行为止
    let mut question_lines = vec![after_number];
    let mut remainder: Vec<&str> = Vec::new();
    let mut in_remainder = false;

    for line in lines {
        if !in_remainder && letter_dot_prefix(line).is_some() {
            in_remainder = true;
        }
        if in_remainder {
            remainder.push(line);
        } else {
            question_lines.push(line);
        }
    }

    let joined = question_lines.join("\n");
    let question = strip_quote_pair(joined.trim());

    if !question.is_empty() && question.chars().all(|c| c.is_ascii_digit()) {
        return Err(SkipReason::NumericOnly);
    }
    if question.is_empty() {
        return Err(SkipReason::EmptyQuestion);
    }

    let (choices, inline_correct) = scan_choices(&remainder);

    Ok(ExtractedQuestion {
        number: number.to_string(),
        question: question.to_string(),
        choices,
        inline_correct,
    })
}

/// 扫描选项区域
///
/// 一个选项从"字母."行开始，文本延伸到下一个顶格"字母."行、
/// 下一个顶格"数字."行或块结束。还没进入任何选项时，行首允许
/// 缩进；已在选项内时只有顶格行才能开启新选项，缩进的"字母."
/// 行归入当前选项的文本。
fn scan_choices(lines: &[&str]) -> (ChoiceSet, String) {
    let mut choices = ChoiceSet::default();
    let mut inline_correct = String::new();
    let mut current: Option<(char, Vec<&str>)> = None;

    for &line in lines {
        match current.take() {
            None => {
                if let Some((letter, text)) = letter_dot_prefix(line.trim_start()) {
                    current = Some((letter, vec![text]));
                }
                // 不在任何选项内的行直接忽略
            }
            Some((letter, acc)) => {
                if let Some((next_letter, text)) = letter_dot_prefix(line) {
                    store_choice(&mut choices, &mut inline_correct, letter, &acc);
                    current = Some((next_letter, vec![text]));
                } else if digit_dot_prefix(line).is_some() {
                    store_choice(&mut choices, &mut inline_correct, letter, &acc);
                } else {
                    let mut acc = acc;
                    acc.push(line);
                    current = Some((letter, acc));
                }
            }
        }
    }

    if let Some((letter, acc)) = current {
        store_choice(&mut choices, &mut inline_correct, letter, &acc);
    }

    (choices, inline_correct)
}

/// 存入一个选项槽位
///
/// 空文本不存；同一字母后出现的覆盖先出现的。文本里出现星号就
/// 把去掉星号后的文本记为行内正确答案，同样是后出现的生效。
fn store_choice(
    choices: &mut ChoiceSet,
    inline_correct: &mut String,
    letter: char,
    lines: &[&str],
) {
    let joined = lines.join("\n");
    let text = strip_quote_pair(joined.trim()).trim();

    if text.is_empty() {
        return;
    }

    if text.contains('*') {
        let cleaned = text.replace('*', "").trim().to_string();
        *inline_correct = cleaned.clone();
        choices.set(letter, cleaned);
    } else {
        choices.set(letter, text);
    }
}

/// 去掉一对包裹文本的直引号（只去一层）
fn strip_quote_pair(text: &str) -> &str {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        &text[1..text.len() - 1]
    } else {
        text
    }
}
