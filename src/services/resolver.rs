//! 正确答案判定 - 业务能力层
//!
//! 把行内星号标记和外部答案表调和为最终的正确答案文本。

use crate::models::{AnswerKey, ChoiceSet};

/// 判定正确答案
///
/// 优先级固定：行内标记非空时直接生效；否则查答案表，查到的
/// 字母对应的选项非空时返回该选项文本；都不满足返回空字符串。
/// 返回空不是错误，只是一条不完整的记录，由调用方计入统计。
pub fn resolve_correct_answer(
    number: &str,
    choices: &ChoiceSet,
    inline_marked: &str,
    answer_key: &AnswerKey,
) -> String {
    if !inline_marked.is_empty() {
        return inline_marked.to_string();
    }

    if let Some(letter) = answer_key.lookup(number) {
        let text = choices.get(letter);
        if !text.is_empty() {
            return text.to_string();
        }
    }

    String::new()
}
