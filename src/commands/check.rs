//! check 命令处理器

use super::render::{render_json, render_text};
use super::{CommandContext, CommandHandler, OutputFormat};
use crate::application::{DiagnosticStore, PassSummary, ValidationService};
use crate::domain::error::{DomainError, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

/// check 命令：执行一次完整校验并输出诊断
pub struct CheckCommand {
    validation: Arc<ValidationService>,
    files: Vec<PathBuf>,
    format: OutputFormat,
    strict: bool,
}

impl CheckCommand {
    pub fn new(
        validation: Arc<ValidationService>,
        files: Vec<PathBuf>,
        format: OutputFormat,
        strict: bool,
    ) -> Self {
        Self {
            validation,
            files,
            format,
            strict,
        }
    }

    /// 执行校验并把结果发布到 store
    pub async fn run_pass(&self, store: &mut DiagnosticStore) -> PassSummary {
        if self.files.is_empty() {
            return self.validation.validate_workspace(store).await;
        }

        let mut documents = Vec::new();
        for path in &self.files {
            match self.validation.load_document(path).await {
                Ok(Some(document)) => documents.push(document),
                Ok(None) => {}
                Err(e) => warn!(path = %path.display(), error = %e, "跳过无法读取的文件"),
            }
        }
        self.validation.validate_documents(documents, store).await
    }
}

#[async_trait]
impl CommandHandler for CheckCommand {
    async fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let mut store = DiagnosticStore::new();
        let summary = self.run_pass(&mut store).await;

        match self.format {
            OutputFormat::Text => {
                for line in render_text(&store, &ctx.root) {
                    println!("{}", line);
                }
                if ctx.verbose {
                    println!(
                        "\n{} 个 .env 文件，{} 个已声明变量，{} 个文档，{} 条警告",
                        summary.env_files, summary.declared, summary.documents, summary.diagnostics
                    );
                }
            }
            OutputFormat::Json => println!("{}", render_json(&store)?),
        }

        if self.strict && summary.diagnostics > 0 {
            return Err(DomainError::Undeclared(summary.diagnostics));
        }
        Ok(())
    }
}
