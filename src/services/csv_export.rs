//! CSV 导出 - 业务能力层
//!
//! 把原始表和导入表序列化为 CSV。列顺序由记录结构体的字段顺序
//! 固定，表头由 serde 重命名给出；零行时也要写出表头。

use crate::error::ExportError;
use crate::models::{ImportRecord, ParsedQuestion};
use std::path::Path;
use tracing::info;

/// 原始表的固定表头
pub const RAW_HEADERS: [&str; 6] = [
    "Question",
    "answer choice A",
    "answer choice B",
    "answer choice C",
    "answer choice D",
    "Correct Answer",
];

/// 导入表的固定表头
pub const IMPORT_HEADERS: [&str; 9] = [
    "ID",
    "Title",
    "Category",
    "Type",
    "Post Content",
    "Status",
    "Menu Order",
    "Options",
    "Answer",
];

/// CSV 导出服务
pub struct CsvExporter;

impl CsvExporter {
    /// 写出原始表 CSV
    pub fn write_raw_table(
        &self,
        path: &Path,
        rows: &[ParsedQuestion],
    ) -> Result<(), ExportError> {
        let mut writer = csv::Writer::from_path(path)?;

        if rows.is_empty() {
            writer.write_record(RAW_HEADERS)?;
        }
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush().map_err(|e| ExportError::WriteFailed {
            path: path.display().to_string(),
            source: e,
        })?;

        info!("📄 原始表已写出: {} ({} 行)", path.display(), rows.len());

        Ok(())
    }

    /// 写出导入表 CSV
    pub fn write_import_table(
        &self,
        path: &Path,
        records: &[ImportRecord],
    ) -> Result<(), ExportError> {
        let mut writer = csv::Writer::from_path(path)?;

        if records.is_empty() {
            writer.write_record(IMPORT_HEADERS)?;
        }
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush().map_err(|e| ExportError::WriteFailed {
            path: path.display().to_string(),
            source: e,
        })?;

        info!(
            "📄 导入表已写出: {} ({} 行)",
            path.display(),
            records.len()
        );

        Ok(())
    }

    /// 把原始表序列化为 CSV 字符串（预览用）
    pub fn raw_table_to_string(&self, rows: &[ParsedQuestion]) -> Result<String, ExportError> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        if rows.is_empty() {
            writer.write_record(RAW_HEADERS)?;
        }
        for row in rows {
            writer.serialize(row)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ExportError::WriteFailed {
                path: "<内存>".to_string(),
                source: e.into_error(),
            })?;

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
