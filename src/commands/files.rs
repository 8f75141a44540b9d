//! files 命令处理器

use super::{CommandContext, CommandHandler, OutputFormat};
use crate::application::ValidationService;
use crate::domain::error::Result;
use crate::infrastructure::paths::display_relative;
use async_trait::async_trait;
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::Arc;

/// files 命令：列出 .env 文件及其声明的变量
pub struct FilesCommand {
    validation: Arc<ValidationService>,
    format: OutputFormat,
}

#[derive(Serialize)]
struct FileView {
    path: String,
    readable: bool,
    variables: Vec<String>,
}

impl FilesCommand {
    pub fn new(validation: Arc<ValidationService>, format: OutputFormat) -> Self {
        Self { validation, format }
    }
}

#[async_trait]
impl CommandHandler for FilesCommand {
    async fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let reports = self.validation.inspect_env_files().await;

        match self.format {
            OutputFormat::Json => {
                let views: Vec<FileView> = reports
                    .into_iter()
                    .map(|r| FileView {
                        path: r.file.path().display().to_string(),
                        readable: r.names.is_some(),
                        variables: r.names.unwrap_or_default(),
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&views)?);
            }
            OutputFormat::Text => {
                if reports.is_empty() {
                    println!("未找到 .env 文件");
                    return Ok(());
                }

                let mut all = BTreeSet::new();
                for report in &reports {
                    let shown = display_relative(&ctx.root, report.file.path());
                    match &report.names {
                        Some(names) => {
                            println!("{} [{} 个变量]", shown, names.len());
                            for name in names {
                                println!("  {}", name);
                                all.insert(name.as_str());
                            }
                        }
                        None => println!("{} [无法读取]", shown),
                    }
                }
                println!("\n合并后总计: {} 个变量", all.len());
            }
        }

        Ok(())
    }
}
