//! Infrastructure Layer - 技术实现
//!
//! 包含：
//! - workspace: 文件系统工作区实现
//! - config: 配置文件加载
//! - paths: 路径工具
//! - prompt: 终端选择器
//! - watcher: 文件变更监听（需要 `watch` 特性）

pub mod config;
pub mod paths;
pub mod prompt;
#[cfg(feature = "watch")]
pub mod watcher;
pub mod workspace;

pub use config::{LintConfig, ScanSettings, WatchSettings};
pub use prompt::PromptSelector;
pub use workspace::{FsWorkspace, ScanFilter};
