//! 应用程序容器
//!
//! 负责依赖注入：加载配置，创建工作区与服务，按子命令组装处理器

use crate::application::{FixService, ValidationService};
use crate::cli::Commands;
use crate::commands::check::CheckCommand;
use crate::commands::files::FilesCommand;
use crate::commands::fix::FixCommand;
use crate::commands::{CommandContext, CommandHandler, OutputFormat};
use crate::domain::error::Result;
use crate::domain::models::{DocumentId, FixRequest};
use crate::domain::repositories::WorkspaceRepository;
use crate::infrastructure::{FsWorkspace, LintConfig, PromptSelector, paths};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// 应用程序配置
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub verbose: bool,
    pub root: Option<PathBuf>,
    pub config_file: Option<PathBuf>,
}

/// 应用程序容器
pub struct Application {
    pub root: PathBuf,
    pub config: LintConfig,
    pub workspace: Arc<FsWorkspace>,
    pub validation: Arc<ValidationService>,
    pub fix: Arc<FixService>,
    verbose: bool,
}

impl Application {
    /// 创建应用程序实例
    pub fn new(app_config: AppConfig) -> Result<Self> {
        let root = paths::resolve_root(app_config.root.as_deref())?;
        let (config, used) = LintConfig::load(app_config.config_file.as_deref(), &root)?;
        debug!(root = %root.display(), config = ?used, "初始化应用");

        let workspace = Arc::new(FsWorkspace::new(&root, &config.scan)?);
        let repository: Arc<dyn WorkspaceRepository> = workspace.clone();

        Ok(Self {
            validation: Arc::new(ValidationService::new(repository.clone())),
            fix: Arc::new(FixService::new(repository)),
            workspace,
            config,
            root,
            verbose: app_config.verbose,
        })
    }

    pub fn context(&self) -> CommandContext {
        CommandContext {
            verbose: self.verbose,
            root: self.root.clone(),
        }
    }

    /// 为子命令组装处理器
    pub fn handler(&self, command: Commands) -> Box<dyn CommandHandler> {
        match command {
            Commands::Check {
                files,
                format,
                strict,
            } => Box::new(CheckCommand::new(
                self.validation.clone(),
                files,
                OutputFormat::from(format.as_str()),
                strict,
            )),
            Commands::Fix {
                name,
                document,
                env_file,
            } => {
                let document = document
                    .as_deref()
                    .map(DocumentId::from_path)
                    .unwrap_or_else(|| DocumentId::new("-"));
                Box::new(FixCommand::new(
                    self.fix.clone(),
                    FixRequest::new(name, document),
                    env_file,
                    Arc::new(PromptSelector::stdin(&self.root)),
                ))
            }
            Commands::Files { format } => Box::new(FilesCommand::new(
                self.validation.clone(),
                OutputFormat::from(format.as_str()),
            )),
            #[cfg(feature = "watch")]
            Commands::Watch { format } => {
                Box::new(crate::commands::watch::WatchCommand::new(
                    self.validation.clone(),
                    self.workspace.filter().clone(),
                    self.config.watch.debounce_ms,
                    OutputFormat::from(format.as_str()),
                ))
            }
        }
    }

    /// 执行子命令
    pub async fn run(&self, command: Commands) -> Result<()> {
        let ctx = self.context();
        self.handler(command).execute(&ctx).await
    }
}
