//! 修复结果

use super::env_file::EnvFile;
use std::fmt;

/// 一次修复命令的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixOutcome {
    /// 已追加声明
    Added { name: String, file: EnvFile },
    /// 目标文件已有 `NAME=` 行，未改动
    AlreadyDeclared { name: String, file: EnvFile },
    /// 用户未选择目标文件
    Cancelled,
}

impl FixOutcome {
    #[must_use]
    pub fn is_file_updated(&self) -> bool {
        matches!(self, FixOutcome::Added { .. })
    }
}

impl fmt::Display for FixOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixOutcome::Added { name, file } => write!(f, "Added {} to {}", name, file.file_name()),
            FixOutcome::AlreadyDeclared { name, file } => {
                write!(f, "{} is already declared in {}", name, file.file_name())
            }
            FixOutcome::Cancelled => write!(f, "已取消"),
        }
    }
}
