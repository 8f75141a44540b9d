//! 文件系统工作区实现

use crate::domain::error::{DomainError, Result};
use crate::domain::models::{Document, DocumentId, EnvFile, SourceLanguage};
use crate::domain::repositories::WorkspaceRepository;
use crate::infrastructure::config::ScanSettings;
use crate::infrastructure::paths;
use async_trait::async_trait;
use glob::Pattern;
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// 判断路径属于 .env 文件、源码文档还是被排除的目录
#[derive(Debug, Clone)]
pub struct ScanFilter {
    root: PathBuf,
    exclude: Vec<String>,
    env_pattern: Pattern,
}

impl ScanFilter {
    pub fn new(root: &Path, settings: &ScanSettings) -> Result<Self> {
        let env_pattern = Pattern::new(&settings.env_glob).map_err(|e| {
            DomainError::Config(format!("无效的 env_glob {:?}: {}", settings.env_glob, e))
        })?;
        Ok(Self {
            root: root.to_path_buf(),
            exclude: settings.exclude.clone(),
            env_pattern,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// 路径中任意一级目录名在排除列表里
    #[must_use]
    pub fn is_excluded(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        relative.components().any(|c| {
            let name = c.as_os_str().to_string_lossy();
            self.exclude.iter().any(|ex| *ex == name)
        })
    }

    /// 文件名匹配 .env 模式（自身的配置文件除外）
    #[must_use]
    pub fn is_env_file(&self, path: &Path) -> bool {
        path.file_name()
            .map(|name| name.to_string_lossy())
            .is_some_and(|name| {
                name != paths::WORKSPACE_CONFIG_FILE && self.env_pattern.matches(&name)
            })
    }

    /// 受支持语言的源码文件
    #[must_use]
    pub fn is_document(&self, path: &Path) -> bool {
        SourceLanguage::language_id_for_path(path).is_some()
    }

    /// watch 模式下值得触发重新校验的路径
    #[must_use]
    pub fn is_relevant(&self, path: &Path) -> bool {
        !self.is_excluded(path) && (self.is_env_file(path) || self.is_document(path))
    }

    /// 递归列出根目录下所有未被排除的普通文件
    ///
    /// 目录遍历是同步 I/O，放到阻塞线程池里执行，不占用运行时线程。
    pub async fn scan(&self) -> Result<Vec<PathBuf>> {
        let filter = self.clone();
        tokio::task::spawn_blocking(move || filter.walk())
            .await
            .map_err(|e| DomainError::Io(format!("目录扫描任务失败: {}", e)))
    }

    /// 同步遍历，不跟随符号链接目录
    fn walk(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();
        let mut pending = vec![self.root.clone()];

        while let Some(dir) = pending.pop() {
            let entries = match std::fs::read_dir(&dir) {
                Ok(entries) => entries,
                Err(e) => {
                    debug!(dir = %dir.display(), error = %e, "跳过无法读取的目录");
                    continue;
                }
            };

            for entry in entries.flatten() {
                let path = entry.path();
                let Ok(file_type) = entry.file_type() else {
                    continue;
                };
                if file_type.is_dir() {
                    if self.is_excluded(&path) {
                        trace!(dir = %path.display(), "排除目录");
                    } else {
                        pending.push(path);
                    }
                } else if file_type.is_file() || (file_type.is_symlink() && path.is_file()) {
                    files.push(path);
                }
            }
        }

        files.sort();
        files
    }
}

/// 文件系统工作区
pub struct FsWorkspace {
    filter: ScanFilter,
}

impl FsWorkspace {
    pub fn new(root: &Path, settings: &ScanSettings) -> Result<Self> {
        Ok(Self {
            filter: ScanFilter::new(root, settings)?,
        })
    }

    pub fn filter(&self) -> &ScanFilter {
        &self.filter
    }
}

#[async_trait]
impl WorkspaceRepository for FsWorkspace {
    async fn find_env_files(&self) -> Result<Vec<EnvFile>> {
        Ok(self
            .filter
            .scan()
            .await?
            .into_iter()
            .filter(|path| self.filter.is_env_file(path))
            .map(EnvFile::new)
            .collect())
    }

    async fn find_documents(&self) -> Result<Vec<Document>> {
        let mut documents = Vec::new();
        for path in self.filter.scan().await? {
            let Some(language_id) = SourceLanguage::language_id_for_path(&path) else {
                continue;
            };
            match tokio::fs::read_to_string(&path).await {
                Ok(text) => documents.push(Document::new(
                    DocumentId::from_path(&path),
                    language_id,
                    text,
                )),
                Err(e) => debug!(path = %path.display(), error = %e, "跳过无法读取的文档"),
            }
        }
        Ok(documents)
    }

    async fn read_file(&self, path: &Path) -> Result<String> {
        tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DomainError::FileNotFound(path.to_path_buf())
            } else {
                e.into()
            }
        })
    }

    async fn append_file(&self, path: &Path, text: &str) -> Result<()> {
        paths::append_to_file(path, text).await
    }
}
