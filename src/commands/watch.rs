//! watch 命令处理器

use super::check::CheckCommand;
use super::render::{render_json, render_text};
use super::{CommandContext, CommandHandler, OutputFormat};
use crate::application::{DiagnosticStore, ValidationService};
use crate::domain::error::Result;
use crate::infrastructure::ScanFilter;
use crate::infrastructure::watcher::WorkspaceWatcher;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

/// watch 命令：文件变更后重新校验整个工作区
pub struct WatchCommand {
    check: CheckCommand,
    filter: ScanFilter,
    debounce_ms: u64,
    format: OutputFormat,
}

impl WatchCommand {
    pub fn new(
        validation: Arc<ValidationService>,
        filter: ScanFilter,
        debounce_ms: u64,
        format: OutputFormat,
    ) -> Self {
        Self {
            check: CheckCommand::new(validation, Vec::new(), format, false),
            filter,
            debounce_ms,
            format,
        }
    }

    fn print(&self, store: &DiagnosticStore, ctx: &CommandContext) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                let lines = render_text(store, &ctx.root);
                if lines.is_empty() {
                    println!("✓ 没有未声明的环境变量");
                }
                for line in lines {
                    println!("{}", line);
                }
            }
            OutputFormat::Json => println!("{}", render_json(store)?),
        }
        Ok(())
    }
}

#[async_trait]
impl CommandHandler for WatchCommand {
    async fn execute(&self, ctx: &CommandContext) -> Result<()> {
        self.run_until(ctx, tokio::signal::ctrl_c()).await
    }
}

impl WatchCommand {
    /// 持续校验，直到 `shutdown` 完成或监听通道关闭
    ///
    /// `shutdown` 只创建一次并在各轮之间复用，校验进行中到达的信号不会丢失。
    pub async fn run_until<F>(&self, ctx: &CommandContext, shutdown: F) -> Result<()>
    where
        F: Future + Send,
    {
        let mut watcher = WorkspaceWatcher::start(self.filter.clone(), self.debounce_ms)?;
        let mut store = DiagnosticStore::new();
        tokio::pin!(shutdown);

        self.check.run_pass(&mut store).await;
        self.print(&store, ctx)?;
        info!(root = %ctx.root.display(), "开始监听工作区");

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("收到中断信号，停止监听");
                    break;
                }
                change = watcher.next_change() => {
                    let Some(paths) = change else { break };
                    if self.format == OutputFormat::Text {
                        println!("\n── 检测到 {} 个文件变更，重新校验 ──", paths.len());
                    }
                    self.check.run_pass(&mut store).await;
                    self.print(&store, ctx)?;
                }
            }
        }

        Ok(())
    }
}
