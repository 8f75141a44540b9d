//! 路径管理工具

use crate::domain::error::{DomainError, Result};
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// 工作区级配置文件名
pub const WORKSPACE_CONFIG_FILE: &str = ".envlint.toml";

/// 用户级配置：~/.envlint/config.toml
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".envlint").join("config.toml"))
}

/// 工作区级配置：<root>/.envlint.toml
pub fn workspace_config_path(root: &Path) -> PathBuf {
    root.join(WORKSPACE_CONFIG_FILE)
}

/// 解析工作区根目录，未指定时使用当前目录
pub fn resolve_root(root: Option<&Path>) -> Result<PathBuf> {
    let root = match root {
        Some(root) => root.to_path_buf(),
        None => std::env::current_dir().map_err(|e| DomainError::Io(e.to_string()))?,
    };
    if !root.is_dir() {
        return Err(DomainError::InvalidArgument(format!(
            "工作区根目录不存在: {}",
            root.display()
        )));
    }
    Ok(root)
}

/// 相对工作区根目录显示路径
pub fn display_relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// 在已有文件末尾追加文本
///
/// 直接以追加模式打开原路径：符号链接会被跟随，inode 与权限位保持不变。
/// 文件不存在时返回 `FileNotFound`，不会新建文件。
pub async fn append_to_file(path: &Path, text: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .await
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => DomainError::FileNotFound(path.to_path_buf()),
            _ => e.into(),
        })?;
    file.write_all(text.as_bytes()).await?;
    file.flush().await?;
    Ok(())
}
