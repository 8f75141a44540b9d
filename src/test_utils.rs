//! 测试工具模块
//!
//! 提供内存工作区、固定选择器和临时目录工作区，避免测试之间互相污染

use crate::domain::error::{DomainError, Result};
use crate::domain::models::{Document, DocumentId, EnvFile};
use crate::domain::repositories::{EnvFileSelector, WorkspaceRepository};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

/// 内存工作区：文件内容为 None 表示不可读
#[derive(Default)]
pub struct InMemoryWorkspace {
    env_files: Vec<PathBuf>,
    documents: Vec<(PathBuf, String)>,
    files: Mutex<BTreeMap<PathBuf, Option<String>>>,
    appends: AtomicUsize,
}

impl InMemoryWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_env_file(mut self, path: &str, content: &str) -> Self {
        self.env_files.push(PathBuf::from(path));
        self.files
            .get_mut()
            .unwrap()
            .insert(PathBuf::from(path), Some(content.to_string()));
        self
    }

    pub fn with_unreadable_env_file(mut self, path: &str) -> Self {
        self.env_files.push(PathBuf::from(path));
        self.files.get_mut().unwrap().insert(PathBuf::from(path), None);
        self
    }

    pub fn with_document(mut self, path: &str, language_id: &str, text: &str) -> Self {
        self.documents
            .push((PathBuf::from(path), language_id.to_string()));
        self.files
            .get_mut()
            .unwrap()
            .insert(PathBuf::from(path), Some(text.to_string()));
        self
    }

    /// 当前文件内容
    pub fn content(&self, path: &Path) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned().flatten()
    }

    /// 追加次数
    pub fn append_count(&self) -> usize {
        self.appends.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WorkspaceRepository for InMemoryWorkspace {
    async fn find_env_files(&self) -> Result<Vec<EnvFile>> {
        let mut files: Vec<EnvFile> = self.env_files.iter().cloned().map(EnvFile::new).collect();
        files.sort();
        Ok(files)
    }

    async fn find_documents(&self) -> Result<Vec<Document>> {
        let mut documents = Vec::new();
        for (path, language_id) in &self.documents {
            if let Some(text) = self.content(path) {
                documents.push(Document::new(
                    DocumentId::from_path(path),
                    language_id.clone(),
                    text,
                ));
            }
        }
        Ok(documents)
    }

    async fn read_file(&self, path: &Path) -> Result<String> {
        match self.files.lock().unwrap().get(path) {
            Some(Some(content)) => Ok(content.clone()),
            Some(None) => Err(DomainError::PermissionDenied(path.display().to_string())),
            None => Err(DomainError::FileNotFound(path.to_path_buf())),
        }
    }

    async fn append_file(&self, path: &Path, text: &str) -> Result<()> {
        let mut files = self.files.lock().unwrap();
        match files.get_mut(path) {
            Some(Some(content)) => {
                content.push_str(text);
                self.appends.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
            Some(None) => Err(DomainError::PermissionDenied(path.display().to_string())),
            None => Err(DomainError::FileNotFound(path.to_path_buf())),
        }
    }
}

/// 固定返回某个文件（或取消）的选择器
pub struct FixedSelector {
    choice: Option<PathBuf>,
}

impl FixedSelector {
    pub fn pick(path: &str) -> Self {
        Self {
            choice: Some(PathBuf::from(path)),
        }
    }

    pub fn cancel() -> Self {
        Self { choice: None }
    }
}

#[async_trait]
impl EnvFileSelector for FixedSelector {
    async fn select(&self, candidates: &[EnvFile]) -> Result<Option<EnvFile>> {
        Ok(self
            .choice
            .as_ref()
            .and_then(|choice| candidates.iter().find(|f| &f.path == choice).cloned()))
    }
}

/// 临时目录工作区
pub struct TempWorkspace {
    dir: TempDir,
}

impl Default for TempWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl TempWorkspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// 工作区根目录
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// 写入相对路径文件，自动创建父目录
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(relative)).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_append() {
        let workspace = InMemoryWorkspace::new().with_env_file(".env", "A=1");
        workspace
            .append_file(Path::new(".env"), "\nB=")
            .await
            .unwrap();
        assert_eq!(workspace.content(Path::new(".env")).unwrap(), "A=1\nB=");
        assert_eq!(workspace.append_count(), 1);

        let err = workspace
            .append_file(Path::new(".env.missing"), "\nB=")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::FileNotFound(_)));
    }

    #[test]
    fn test_temp_workspace_creates_parents() {
        let workspace = TempWorkspace::new();
        let path = workspace.write("nested/dir/.env", "A=1");
        assert!(path.exists());
        assert_eq!(workspace.read("nested/dir/.env"), "A=1");
    }
}
