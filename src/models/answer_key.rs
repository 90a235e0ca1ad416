use std::collections::HashMap;

/// 答案表
///
/// 题号到正确选项字母（A-D，已统一为大写）的映射。
/// 每次转换开始时构建一次，之后只读；没有答案表文件时为空映射。
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AnswerKey {
    entries: HashMap<String, char>,
}

impl AnswerKey {
    /// 创建空答案表
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入一条答案（同一题号后出现的覆盖先出现的）
    pub fn insert(&mut self, number: impl Into<String>, letter: char) {
        self.entries
            .insert(number.into(), letter.to_ascii_uppercase());
    }

    /// 按题号查询正确选项字母
    pub fn lookup(&self, number: &str) -> Option<char> {
        self.entries.get(number).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
