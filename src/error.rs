use thiserror::Error;

/// 应用程序错误类型
///
/// 解析核心本身不产生错误（格式问题按块跳过并计数），
/// 这里只覆盖参数层面的失败：任务配置、重整校验和导出写入。
#[derive(Debug, Error)]
pub enum AppError {
    /// 任务配置错误
    #[error("任务配置错误: {0}")]
    Job(#[from] JobError),
    /// 重整校验错误
    #[error("重整校验错误: {0}")]
    Reshape(#[from] ReshapeError),
    /// 导出错误
    #[error("导出错误: {0}")]
    Export(#[from] ExportError),
}

/// 任务配置错误
#[derive(Debug, Error)]
pub enum JobError {
    /// 导入记录必须有类别
    #[error("类别不能为空")]
    EmptyCategory,
}

/// 重整校验错误
///
/// 原始表转导入格式前的校验，行号从1开始，只报第一处问题。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReshapeError {
    #[error("第 {row} 行存在空缺字段: {column}")]
    EmptyCell { row: usize, column: &'static str },
    #[error("第 {row} 行的正确答案与任何选项都不一致")]
    AnswerMismatch { row: usize },
}

/// 导出错误
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV 写入失败: {0}")]
    Csv(#[from] csv::Error),
    #[error("JSON 序列化失败: {0}")]
    Json(#[from] serde_json::Error),
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        source: std::io::Error,
    },
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
