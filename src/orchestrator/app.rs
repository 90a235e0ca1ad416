//! 应用入口 - 编排层
//!
//! ## 职责
//!
//! 1. **应用初始化**：写日志文件头、输出启动信息
//! 2. **任务解析**：从 TOML 任务文件或环境变量配置得到转换任务
//! 3. **输入加载**：读取试题文本和可选的答案表文本
//! 4. **流程调度**：调用 ConvertProcessor 完成解析
//! 5. **结果落盘**：原始表 CSV、导入表 CSV、警告文件、统计报告
//!
//! 一次运行处理一个转换任务；批量调度交给外层脚本。

use crate::config::Config;
use crate::error::JobError;
use crate::models::{load_job_file, load_text_file, ConvertJob, ParseStats};
use crate::orchestrator::convert_processor::{ConvertOutput, ConvertProcessor};
use crate::services::{CsvExporter, ReshapeService, WarnWriter};
use crate::utils::logging::{init_log_file, log_startup, print_final_stats};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use tokio::fs;
use tracing::{info, warn};

/// 统计报告，序列化为 JSON 落盘
#[derive(Debug, Serialize)]
struct ConvertReport {
    exam_file: String,
    generated_at: String,
    stats: ParseStats,
}

/// 应用主结构
pub struct App {
    config: Config,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        init_log_file(&config.output_log_file)?;

        log_startup(&config);

        Ok(Self { config })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        let job = self.resolve_job().await?;

        if job.category.trim().is_empty() {
            return Err(JobError::EmptyCategory.into());
        }

        let output = self.convert(&job).await?;

        if output.questions.is_empty() {
            warn!("⚠️ 未解析出任何题目，请检查输入格式");
        }

        self.write_outputs(&job, &output).await?;

        print_final_stats(&output.stats, &job);

        Ok(())
    }

    /// 得到本次运行的转换任务
    async fn resolve_job(&self) -> Result<ConvertJob> {
        match &self.config.job_file {
            Some(path) => {
                info!("📁 从任务文件加载: {}", path);
                load_job_file(Path::new(path)).await
            }
            None => Ok(ConvertJob::from_config(&self.config)),
        }
    }

    /// 加载输入并执行解析
    async fn convert(&self, job: &ConvertJob) -> Result<ConvertOutput> {
        info!("📄 试题文件: {}", job.exam_file);
        let exam_text = load_text_file(Path::new(&job.exam_file)).await?;

        let answer_key_text = match &job.answer_key_file {
            Some(path) => {
                info!("📄 答案表文件: {}", path);
                Some(load_text_file(Path::new(path)).await?)
            }
            None => None,
        };

        let processor = ConvertProcessor::new(self.config.verbose_logging);
        Ok(processor.process(&exam_text, answer_key_text.as_deref()))
    }

    /// 落盘全部输出
    async fn write_outputs(&self, job: &ConvertJob, output: &ConvertOutput) -> Result<()> {
        // 被跳过的块写入警告文件
        if !output.skipped_blocks.is_empty() {
            let warn_writer = WarnWriter::with_path(&job.warn_file);
            for skipped in &output.skipped_blocks {
                warn_writer
                    .write(skipped.index, skipped.reason, &skipped.preview)
                    .await?;
            }
            info!(
                "⚠️ {} 个被跳过的块已记录到 {}",
                output.skipped_blocks.len(),
                job.warn_file
            );
        }

        let exporter = CsvExporter;
        exporter.write_raw_table(Path::new(&job.output_csv), &output.questions)?;

        // 导入表要求记录完整；校验不过时只警告并跳过导入表，
        // 原始表和报告照常写出
        let reshape = ReshapeService::new(&job.category, job.blank_ids);
        match reshape.validate(&output.questions) {
            Ok(()) => {
                let records = reshape.transform(&output.questions);
                exporter.write_import_table(Path::new(&job.import_csv), &records)?;
            }
            Err(e) => {
                warn!("⚠️ 原始表未通过导入校验，跳过导入表: {}", e);
            }
        }

        self.write_report(job, &output.stats).await?;

        Ok(())
    }

    /// 写出统计报告 JSON
    async fn write_report(&self, job: &ConvertJob, stats: &ParseStats) -> Result<()> {
        let report = ConvertReport {
            exam_file: job.exam_file.clone(),
            generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            stats: stats.clone(),
        };

        let json = serde_json::to_string_pretty(&report)?;
        fs::write(&job.report_file, json)
            .await
            .with_context(|| format!("无法写入报告文件: {}", job.report_file))?;

        info!("📊 统计报告已写出: {}", job.report_file);

        Ok(())
    }
}
