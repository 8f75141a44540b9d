//! 命令处理器
//!
//! 每个命令一个模块，实现 CommandHandler trait。
//! 这一层就是宿主适配器：把工作区内容喂给校验服务，渲染诊断，触发修复。

use crate::domain::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

pub mod check;
pub mod files;
pub mod fix;
pub mod render;
#[cfg(feature = "watch")]
pub mod watch;

/// 命令上下文
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub verbose: bool,
    /// 工作区根目录，用于显示相对路径
    pub root: PathBuf,
}

/// 命令处理器 trait
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// 执行命令
    async fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// 输出格式类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" | "j" => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::from("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::from("j"), OutputFormat::Json);
        assert_eq!(OutputFormat::from("text"), OutputFormat::Text);
        assert_eq!(OutputFormat::from("whatever"), OutputFormat::Text);
    }
}
