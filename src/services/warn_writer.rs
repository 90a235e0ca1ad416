//! 警告写入服务 - 业务能力层
//!
//! 只负责"写 warn.txt"能力，不关心流程

use crate::services::extractor::SkipReason;
use anyhow::Result;
use std::fs::OpenOptions;
use std::io::Write;
use tracing::debug;

/// 警告写入服务
///
/// 职责：
/// - 把被跳过的题目块追加到 warn.txt
/// - 只处理单个块的警告
/// - 不关心流程顺序
pub struct WarnWriter {
    warn_file_path: String,
}

impl WarnWriter {
    /// 创建新的警告写入服务
    pub fn new() -> Self {
        Self {
            warn_file_path: "warn.txt".to_string(),
        }
    }

    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            warn_file_path: path.into(),
        }
    }

    /// 写入一条跳过警告
    pub async fn write(
        &self,
        block_index: usize,
        reason: SkipReason,
        preview: &str,
    ) -> Result<()> {
        debug!(
            "写入警告: 块 {} | 原因: {} | 预览长度: {}",
            block_index,
            reason,
            preview.len()
        );

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.warn_file_path)?;

        let warn_msg = format!("块 {} | {} | 内容: {}\n", block_index, reason, preview);

        file.write_all(warn_msg.as_bytes())?;

        Ok(())
    }
}

impl Default for WarnWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_appends_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("warn.txt");
        let writer = WarnWriter::with_path(path.to_string_lossy());

        writer
            .write(3, SkipReason::NumericOnly, "5. 1999")
            .await
            .unwrap();
        writer
            .write(7, SkipReason::NoQuestionMatch, "无题号的块")
            .await
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("块 3"));
        assert!(lines[0].contains("题干只含数字"));
        assert!(lines[1].contains("块 7"));
    }
}
