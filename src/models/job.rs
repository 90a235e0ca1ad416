use crate::config::Config;
use serde::Deserialize;

/// 单次转换任务
///
/// 描述一次完整的转换：输入文件、可选答案表、类别和各输出路径。
/// 可以从 TOML 任务文件加载，也可以直接由环境变量配置生成。
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertJob {
    /// 试题文本文件路径
    pub exam_file: String,
    /// 答案表文本文件路径（可选）
    #[serde(default)]
    pub answer_key_file: Option<String>,
    /// 导入记录的类别
    pub category: String,
    /// 原始表 CSV 输出路径
    #[serde(default = "default_output_csv")]
    pub output_csv: String,
    /// 导入格式 CSV 输出路径
    #[serde(default = "default_import_csv")]
    pub import_csv: String,
    /// 统计报告 JSON 输出路径
    #[serde(default = "default_report_file")]
    pub report_file: String,
    /// 警告文件路径
    #[serde(default = "default_warn_file")]
    pub warn_file: String,
    /// 导出时 ID 列留空
    #[serde(default)]
    pub blank_ids: bool,
}

fn default_output_csv() -> String {
    "exam_questions.csv".to_string()
}

fn default_import_csv() -> String {
    "import_questions.csv".to_string()
}

fn default_report_file() -> String {
    "report.json".to_string()
}

fn default_warn_file() -> String {
    "warn.txt".to_string()
}

impl ConvertJob {
    /// 没有任务文件时，由全局配置生成任务
    pub fn from_config(config: &Config) -> Self {
        Self {
            exam_file: config.exam_file.clone(),
            answer_key_file: config.answer_key_file.clone(),
            category: config.category.clone(),
            output_csv: config.output_csv.clone(),
            import_csv: config.import_csv.clone(),
            report_file: config.report_file.clone(),
            warn_file: config.warn_file.clone(),
            blank_ids: config.blank_ids,
        }
    }
}
