/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// TOML 任务文件路径（设置后优先于下面的单项配置）
    pub job_file: Option<String>,
    /// 试题文本文件路径
    pub exam_file: String,
    /// 答案表文本文件路径
    pub answer_key_file: Option<String>,
    /// 导入记录的类别
    pub category: String,
    /// 原始表 CSV 输出路径
    pub output_csv: String,
    /// 导入格式 CSV 输出路径
    pub import_csv: String,
    /// 统计报告 JSON 输出路径
    pub report_file: String,
    /// 警告文件路径
    pub warn_file: String,
    /// 导出时 ID 列留空
    pub blank_ids: bool,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            job_file: None,
            exam_file: "exam.txt".to_string(),
            answer_key_file: None,
            category: "general".to_string(),
            output_csv: "exam_questions.csv".to_string(),
            import_csv: "import_questions.csv".to_string(),
            report_file: "report.json".to_string(),
            warn_file: "warn.txt".to_string(),
            blank_ids: false,
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            job_file: std::env::var("JOB_FILE").ok(),
            exam_file: std::env::var("EXAM_FILE").unwrap_or(default.exam_file),
            answer_key_file: std::env::var("ANSWER_KEY_FILE").ok(),
            category: std::env::var("CATEGORY").unwrap_or(default.category),
            output_csv: std::env::var("OUTPUT_CSV").unwrap_or(default.output_csv),
            import_csv: std::env::var("IMPORT_CSV").unwrap_or(default.import_csv),
            report_file: std::env::var("REPORT_FILE").unwrap_or(default.report_file),
            warn_file: std::env::var("WARN_FILE").unwrap_or(default.warn_file),
            blank_ids: std::env::var("BLANK_IDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.blank_ids),
            verbose_logging: std::env::var("VERBOSE_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
        }
    }
}
