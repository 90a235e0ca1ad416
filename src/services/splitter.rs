//! 题目块切分 - 业务能力层
//!
//! 把整份试题文本按题号边界切成题目块。
//! 不用回溯正则，而是显式的按行扫描，边界规则可审计。

use crate::models::QuestionBlock;

/// 把各种换行统一为 \n，下游模式不再关心换行差异
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// 识别"数字."前缀：返回 (题号, 句点之后的剩余部分)
///
/// 数字必须从行首第一个字符开始，中间不允许空白。
pub(crate) fn digit_dot_prefix(line: &str) -> Option<(&str, &str)> {
    let digits = line.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    if line.as_bytes().get(digits) != Some(&b'.') {
        return None;
    }
    Some((&line[..digits], &line[digits + 1..]))
}

/// 识别顶格的"字母."前缀：返回 (大写字母, 句点之后的剩余部分)
pub(crate) fn letter_dot_prefix(line: &str) -> Option<(char, &str)> {
    let mut chars = line.chars();
    let letter = chars.next()?;
    if !matches!(letter, 'A'..='D' | 'a'..='d') {
        return None;
    }
    if chars.next() != Some('.') {
        return None;
    }
    // 字母和句点都是 ASCII，字节偏移 2 是安全的
    Some((letter.to_ascii_uppercase(), &line[2..]))
}

/// 切分题目块
///
/// 块边界是"换行后紧跟数字和句点"的行首；第一个块从文本开头算起，
/// 不要求有边界。纯空白的块在产出前被丢弃。返回惰性序列，只能
/// 消费一次；需要再次遍历时重新调用本函数。
pub fn split_blocks(text: &str) -> BlockIter {
    BlockIter {
        text: normalize_line_endings(text),
        pos: 0,
        index: 0,
    }
}

/// 题目块的惰性迭代器
#[derive(Debug)]
pub struct BlockIter {
    text: String,
    pos: usize,
    index: usize,
}

impl BlockIter {
    /// 从 from 起寻找下一个块边界（边界行的起始字节偏移）
    fn next_boundary(&self, from: usize) -> Option<usize> {
        let mut search = from;
        while let Some(nl) = self.text[search..].find('\n') {
            let line_start = search + nl + 1;
            if line_start >= self.text.len() {
                return None;
            }
            if digit_dot_prefix(&self.text[line_start..]).is_some() {
                return Some(line_start);
            }
            search = line_start;
        }
        None
    }
}

impl Iterator for BlockIter {
    type Item = QuestionBlock;

    fn next(&mut self) -> Option<QuestionBlock> {
        while self.pos < self.text.len() {
            let start = self.pos;
            let end = self.next_boundary(start).unwrap_or(self.text.len());
            self.pos = end;

            let raw = self.text[start..end].trim_end_matches('\n');
            if raw.trim().is_empty() {
                continue;
            }

            self.index += 1;
            return Some(QuestionBlock {
                index: self.index,
                text: raw.to_string(),
            });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_texts(input: &str) -> Vec<String> {
        split_blocks(input).map(|b| b.text).collect()
    }

    #[test]
    fn test_split_two_questions() {
        let blocks = block_texts("1. 第一题\nA. x\nB. y\n2. 第二题\nA. z");

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], "1. 第一题\nA. x\nB. y");
        assert_eq!(blocks[1], "2. 第二题\nA. z");
    }

    #[test]
    fn test_first_block_without_boundary() {
        // 第一个块从文本开头算起，即使不是题号行
        let blocks = block_texts("说明文字\n1. 第一题");

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], "说明文字");
        assert_eq!(blocks[1], "1. 第一题");
    }

    #[test]
    fn test_boundary_requires_line_start() {
        // 行中间的"数字."不是边界
        let blocks = block_texts("1. 价格是 3. 5 元\nA. 对");

        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn test_indented_number_is_not_boundary() {
        // 边界要求数字紧跟在换行后，前面不允许空白
        let blocks = block_texts("1. 第一题\n  2. 缩进的不算");

        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn test_crlf_normalized() {
        let blocks = block_texts("1. 甲\r\nA. x\r\n2. 乙");

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], "1. 甲\nA. x");
    }

    #[test]
    fn test_blank_blocks_dropped() {
        let blocks = block_texts("\n\n1. 甲\n\n\n2. 乙\n\n");

        assert_eq!(blocks.len(), 2);
    }

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(block_texts("").is_empty());
        assert!(block_texts("   \n  \n").is_empty());
    }

    #[test]
    fn test_block_index_counts_emitted_blocks() {
        let indices: Vec<usize> = split_blocks("1. 甲\n\n2. 乙").map(|b| b.index).collect();
        assert_eq!(indices, vec![1, 2]);
    }

    #[test]
    fn test_digit_dot_prefix() {
        assert_eq!(digit_dot_prefix("12. 题干"), Some(("12", " 题干")));
        assert_eq!(digit_dot_prefix("12 . 题干"), None);
        assert_eq!(digit_dot_prefix("a12."), None);
        assert_eq!(digit_dot_prefix(""), None);
    }

    #[test]
    fn test_letter_dot_prefix() {
        assert_eq!(letter_dot_prefix("A. 选项"), Some(('A', " 选项")));
        assert_eq!(letter_dot_prefix("c.x"), Some(('C', "x")));
        assert_eq!(letter_dot_prefix("E. 超范围"), None);
        assert_eq!(letter_dot_prefix("A 选项"), None);
    }
}
