//! 配置加载
//!
//! 查找顺序：--config 指定的文件 > <root>/.envlint.toml > ~/.envlint/config.toml > 默认值

use crate::domain::error::{DomainError, Result};
use crate::infrastructure::paths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// 全局配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LintConfig {
    pub scan: ScanSettings,
    pub watch: WatchSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanSettings {
    /// 跳过的目录名
    pub exclude: Vec<String>,
    /// .env 文件名匹配模式
    pub env_glob: String,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            exclude: [".git", "node_modules", "target", "vendor", "dist"]
                .into_iter()
                .map(String::from)
                .collect(),
            env_glob: ".env*".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WatchSettings {
    /// 防抖时间（毫秒）
    pub debounce_ms: u64,
}

impl Default for WatchSettings {
    fn default() -> Self {
        Self { debounce_ms: 300 }
    }
}

impl LintConfig {
    /// 按查找顺序加载配置，返回配置和实际使用的文件
    pub fn load(explicit: Option<&Path>, root: &Path) -> Result<(Self, Option<PathBuf>)> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(DomainError::FileNotFound(path.to_path_buf()));
            }
            return Ok((Self::from_file(path)?, Some(path.to_path_buf())));
        }

        let candidates = [
            Some(paths::workspace_config_path(root)),
            paths::user_config_path(),
        ];
        for path in candidates.into_iter().flatten() {
            if path.is_file() {
                debug!(path = %path.display(), "加载配置文件");
                return Ok((Self::from_file(&path)?, Some(path)));
            }
        }

        Ok((Self::default(), None))
    }

    /// 从文件解析
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| DomainError::Config(format!("{}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TempWorkspace;

    #[test]
    fn test_defaults() {
        let config = LintConfig::default();
        assert_eq!(config.scan.env_glob, ".env*");
        assert!(config.scan.exclude.contains(&"node_modules".to_string()));
        assert_eq!(config.watch.debounce_ms, 300);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let workspace = TempWorkspace::new();
        workspace.write(".envlint.toml", "[watch]\ndebounce_ms = 50\n");

        let (config, used) = LintConfig::load(None, workspace.path()).unwrap();
        assert_eq!(config.watch.debounce_ms, 50);
        assert_eq!(config.scan, ScanSettings::default());
        assert!(used.unwrap().ends_with(".envlint.toml"));
    }

    #[test]
    fn test_explicit_file() {
        let workspace = TempWorkspace::new();
        let path = workspace.write(
            "custom.toml",
            "[scan]\nexclude = [\"build\"]\nenv_glob = \"*.env\"\n",
        );

        let (config, _) = LintConfig::load(Some(&path), workspace.path()).unwrap();
        assert_eq!(config.scan.exclude, vec!["build"]);
        assert_eq!(config.scan.env_glob, "*.env");
    }

    #[test]
    fn test_explicit_missing_file() {
        let workspace = TempWorkspace::new();
        let missing = workspace.path().join("nope.toml");
        let err = LintConfig::load(Some(&missing), workspace.path()).unwrap_err();
        assert!(matches!(err, DomainError::FileNotFound(_)));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let workspace = TempWorkspace::new();
        let path = workspace.write("bad.toml", "[scan]\nexcludes = []\n");
        let err = LintConfig::load(Some(&path), workspace.path()).unwrap_err();
        assert!(matches!(err, DomainError::Config(_)));
    }
}
