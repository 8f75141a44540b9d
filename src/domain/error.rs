//! 领域层错误类型

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DomainError>;

/// 领域层错误类型
///
/// 扫描路径上的错误（坏行、读不到的文件）都在本地吸收，不会出现在这里；
/// 只有用户主动触发的修复路径和启动阶段会把错误交给调用方。
#[derive(Error, Debug, Diagnostic, Clone)]
pub enum DomainError {
    #[error("No .env file found in the workspace.")]
    #[diagnostic(
        code(envlint::no_env_file),
        help("在工作区根目录创建一个 .env 文件后重试")
    )]
    NoEnvFileFound,

    #[error("发现 {0} 处未声明的环境变量")]
    #[diagnostic(
        code(envlint::undeclared),
        help("使用 'envlint fix <NAME>' 把变量追加到 .env 文件")
    )]
    Undeclared(usize),

    #[error("IO 错误: {0}")]
    #[diagnostic(code(envlint::io))]
    Io(String),

    #[error("文件不存在: {0}")]
    #[diagnostic(code(envlint::file_not_found))]
    FileNotFound(PathBuf),

    #[error("权限不足: {0}")]
    #[diagnostic(code(envlint::permission_denied), help("检查文件权限"))]
    PermissionDenied(String),

    #[error("配置错误: {0}")]
    #[diagnostic(code(envlint::config), help("参考 .envlint.toml 的 [scan] 与 [watch] 小节"))]
    Config(String),

    #[error("序列化错误: {0}")]
    #[diagnostic(code(envlint::serialization))]
    Serialization(String),

    #[error("无效参数: {0}")]
    #[diagnostic(code(envlint::invalid_argument))]
    InvalidArgument(String),

    #[error("文件监听失败: {0}")]
    #[diagnostic(code(envlint::watch))]
    Watch(String),
}

impl DomainError {
    /// 报告错误，支持详细/安静模式
    pub fn report(&self, verbose: bool) {
        if verbose {
            eprintln!("❌ 错误: {}", self);
            if let Some(code) = self.code() {
                eprintln!("  ├─ 代码: {}", code);
            }
            if let Some(help) = self.help() {
                eprintln!("  └─ 提示: {}", help);
            }
            let mut current = std::error::Error::source(self);
            while let Some(next) = current {
                eprintln!("     └─ {}", next);
                current = next.source();
            }
        } else {
            match self {
                DomainError::NoEnvFileFound => eprintln!("{}", self),
                DomainError::FileNotFound(path) => eprintln!("文件不存在: {}", path.display()),
                _ => eprintln!("错误: {}", self),
            }
        }
    }
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => DomainError::PermissionDenied(err.to_string()),
            _ => DomainError::Io(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for DomainError {
    fn from(err: toml::de::Error) -> Self {
        DomainError::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_env_file_message() {
        assert_eq!(
            DomainError::NoEnvFileFound.to_string(),
            "No .env file found in the workspace."
        );
    }

    #[test]
    fn test_io_permission_mapping() {
        let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(matches!(
            DomainError::from(err),
            DomainError::PermissionDenied(_)
        ));

        let err = std::io::Error::other("boom");
        assert!(matches!(DomainError::from(err), DomainError::Io(_)));
    }

    #[test]
    fn test_diagnostic_code() {
        let code = DomainError::NoEnvFileFound.code().unwrap().to_string();
        assert_eq!(code, "envlint::no_env_file");
    }
}
