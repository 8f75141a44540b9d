//! fix 命令处理器

use super::{CommandContext, CommandHandler};
use crate::application::FixService;
use crate::domain::error::{DomainError, Result};
use crate::domain::models::{EnvFile, FixOutcome, FixRequest};
use crate::domain::repositories::EnvFileSelector;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;

/// fix 命令：把缺失变量追加到 .env 文件
pub struct FixCommand {
    fix_service: Arc<FixService>,
    request: FixRequest,
    env_file: Option<PathBuf>,
    selector: Arc<dyn EnvFileSelector>,
}

impl FixCommand {
    pub fn new(
        fix_service: Arc<FixService>,
        request: FixRequest,
        env_file: Option<PathBuf>,
        selector: Arc<dyn EnvFileSelector>,
    ) -> Self {
        Self {
            fix_service,
            request,
            env_file,
            selector,
        }
    }

    /// 执行修复并返回结果
    pub async fn run(&self) -> Result<FixOutcome> {
        match &self.env_file {
            Some(path) => {
                if !path.is_file() {
                    return Err(DomainError::FileNotFound(path.clone()));
                }
                self.fix_service
                    .apply_to(&self.request.variable_name, EnvFile::new(path.clone()))
                    .await
            }
            None => {
                self.fix_service
                    .apply(&self.request, self.selector.as_ref())
                    .await
            }
        }
    }
}

#[async_trait]
impl CommandHandler for FixCommand {
    async fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let outcome = self.run().await?;
        match &outcome {
            FixOutcome::Added { .. } | FixOutcome::AlreadyDeclared { .. } => {
                println!("{}", outcome);
            }
            FixOutcome::Cancelled => {
                println!("未选择 .env 文件，没有修改任何内容");
            }
        }
        if ctx.verbose {
            println!("来源文档: {}", self.request.document);
        }
        Ok(())
    }
}
