//! 答案表解析 - 业务能力层
//!
//! 把单独提供的"题号: 字母"文本解析为答案表

use crate::models::AnswerKey;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// 答案对模式："数字 : 字母"，冒号两侧允许空白，字母大小写不敏感
static KEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*:\s*([A-Da-d])").expect("答案表正则不合法"));

/// 解析答案表文本
///
/// 扫描整段文本中所有不重叠的"题号: 字母"匹配，跨行也算；
/// 同一题号出现多次时最后一次生效。无法匹配的内容直接忽略，
/// 空文本得到空答案表，本函数永不失败。
pub fn parse_answer_key(text: &str) -> AnswerKey {
    let mut key = AnswerKey::new();

    if text.is_empty() {
        return key;
    }

    for caps in KEY_PATTERN.captures_iter(text) {
        let number = &caps[1];
        // 捕获组保证恰好一个 A-D 字母
        if let Some(letter) = caps[2].chars().next() {
            key.insert(number, letter);
        }
    }

    debug!("答案表解析完成: {} 条", key.len());

    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_pairs() {
        let key = parse_answer_key("1: A\n2:b\n3 : C");

        assert_eq!(key.len(), 3);
        assert_eq!(key.lookup("1"), Some('A'));
        // 小写字母统一转大写
        assert_eq!(key.lookup("2"), Some('B'));
        assert_eq!(key.lookup("3"), Some('C'));
    }

    #[test]
    fn test_duplicate_number_last_wins() {
        let key = parse_answer_key("1 : a\n2:B\nnot a pair\n1: c");

        assert_eq!(key.len(), 2);
        assert_eq!(key.lookup("1"), Some('C'));
        assert_eq!(key.lookup("2"), Some('B'));
    }

    #[test]
    fn test_empty_and_garbage_input() {
        assert!(parse_answer_key("").is_empty());
        assert!(parse_answer_key("完全没有答案对的文本").is_empty());
        // 字母超出 A-D 范围不算答案对
        assert!(parse_answer_key("1: E").is_empty());
    }

    #[test]
    fn test_pairs_anywhere_in_line() {
        // 答案对不要求独占一行
        let key = parse_answer_key("第一部分 1:A 2:B 第二部分 3:D");

        assert_eq!(key.len(), 3);
        assert_eq!(key.lookup("3"), Some('D'));
    }
}
