use crate::models::job::ConvertJob;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// 从 TOML 任务文件加载转换任务
pub async fn load_job_file(job_file_path: &Path) -> Result<ConvertJob> {
    let content = fs::read_to_string(job_file_path)
        .await
        .with_context(|| format!("无法读取任务文件: {}", job_file_path.display()))?;

    let job: ConvertJob = toml::from_str(&content)
        .with_context(|| format!("无法解析任务文件: {}", job_file_path.display()))?;

    Ok(job)
}

/// 读取试题或答案表文本文件
///
/// 输入要求是 UTF-8 文本；编码探测由上游协作方负责，不在本程序范围内。
pub async fn load_text_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .await
        .with_context(|| format!("无法读取文本文件: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_job_file_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "exam_file = \"exam.txt\"\ncategory = \"finance\"\nblank_ids = true"
        )
        .unwrap();

        let job = load_job_file(file.path()).await.unwrap();

        assert_eq!(job.exam_file, "exam.txt");
        assert_eq!(job.category, "finance");
        assert!(job.blank_ids);
        assert!(job.answer_key_file.is_none());
        // 未给出的输出路径使用默认值
        assert_eq!(job.output_csv, "exam_questions.csv");
        assert_eq!(job.import_csv, "import_questions.csv");
    }

    #[tokio::test]
    async fn test_load_job_file_missing() {
        let result = load_job_file(Path::new("no_such_job.toml")).await;
        assert!(result.is_err());
    }
}
