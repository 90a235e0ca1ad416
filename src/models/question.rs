use serde::{Deserialize, Serialize};

/// 题目块
///
/// 切分器输出的中间值：一段归属于某个题号的原始文本。
/// 只存在于切分器到提取器的交接过程中，不做持久化。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBlock {
    /// 块在原文中的序号（从1开始，仅用于日志和警告）
    pub index: usize,
    /// 块的原始文本（换行已统一为 \n）
    pub text: String,
}

/// 四个选项槽位（A-D）
///
/// 领域保证最多四个字母选项，用固定结构而不是开放的字典存储。
/// 缺失的选项为空字符串。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChoiceSet {
    pub a: String,
    pub b: String,
    pub c: String,
    pub d: String,
}

impl ChoiceSet {
    /// 按字母读取选项文本
    pub fn get(&self, letter: char) -> &str {
        match letter.to_ascii_uppercase() {
            'A' => &self.a,
            'B' => &self.b,
            'C' => &self.c,
            'D' => &self.d,
            _ => "",
        }
    }

    /// 按字母写入选项文本（同一字母后出现的覆盖先出现的）
    pub fn set(&mut self, letter: char, text: impl Into<String>) {
        let text = text.into();
        match letter.to_ascii_uppercase() {
            'A' => self.a = text,
            'B' => self.b = text,
            'C' => self.c = text,
            'D' => self.d = text,
            _ => {}
        }
    }

    /// 是否存在空缺的选项
    pub fn has_missing(&self) -> bool {
        self.a.is_empty() || self.b.is_empty() || self.c.is_empty() || self.d.is_empty()
    }
}

/// 提取器的中间输出
///
/// 题号只用于答案表查询，装配最终记录时不保留。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedQuestion {
    /// 题号（数字字符串）
    pub number: String,
    /// 题干文本（已去掉题号前缀和外层引号）
    pub question: String,
    /// 四个选项
    pub choices: ChoiceSet,
    /// 行内星号标记的正确答案文本（已去星号），没有则为空
    pub inline_correct: String,
}

/// 解析完成的题目记录
///
/// 列顺序即下游 CSV 的固定列顺序，serde 重命名保持与导入方约定的表头一致。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedQuestion {
    #[serde(rename = "Question")]
    pub question: String,
    #[serde(rename = "answer choice A")]
    pub choice_a: String,
    #[serde(rename = "answer choice B")]
    pub choice_b: String,
    #[serde(rename = "answer choice C")]
    pub choice_c: String,
    #[serde(rename = "answer choice D")]
    pub choice_d: String,
    #[serde(rename = "Correct Answer")]
    pub correct_answer: String,
}

impl ParsedQuestion {
    /// 由提取结果和判定出的正确答案装配记录
    pub fn assemble(extracted: ExtractedQuestion, correct_answer: String) -> Self {
        let ExtractedQuestion {
            question, choices, ..
        } = extracted;
        Self {
            question,
            choice_a: choices.a,
            choice_b: choices.b,
            choice_c: choices.c,
            choice_d: choices.d,
            correct_answer,
        }
    }

    /// 是否存在空缺的选项
    pub fn has_missing_choices(&self) -> bool {
        self.choice_a.is_empty()
            || self.choice_b.is_empty()
            || self.choice_c.is_empty()
            || self.choice_d.is_empty()
    }
}

/// 单次转换的统计信息
///
/// 只汇总计数，不保留逐块诊断，用户据此判断输入质量。
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// 成功解析的题目数
    pub parsed: usize,
    /// 因格式不符被跳过的块数
    pub skipped: usize,
    /// 存在空缺选项的题目数
    pub missing_choices: usize,
    /// 未能确定正确答案的题目数
    pub missing_correct: usize,
}
