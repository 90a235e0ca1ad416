use serde::{Deserialize, Serialize};

/// 导入格式的单条记录
///
/// 重整服务把原始表（题干 + 四个选项 + 正确答案）转换为题库导入方
/// 要求的列结构，列名由 serde 重命名保证。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRecord {
    /// 记录ID，留空导出时为空字符串
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Category")]
    pub category: String,
    /// 固定为 single-choice
    #[serde(rename = "Type")]
    pub question_type: String,
    #[serde(rename = "Post Content")]
    pub post_content: String,
    /// 固定为 publish
    #[serde(rename = "Status")]
    pub status: String,
    /// 记录在文件中的序号（从1开始）
    #[serde(rename = "Menu Order")]
    pub menu_order: usize,
    /// 四个选项用 | 拼接
    #[serde(rename = "Options")]
    pub options: String,
    #[serde(rename = "Answer")]
    pub answer: String,
}
