//! 被扫描的文档

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// 文档标识（文件路径或编辑器 URI）
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn from_path(path: &Path) -> Self {
        Self(path.display().to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 作为文件路径使用
    #[must_use]
    pub fn to_path(&self) -> PathBuf {
        PathBuf::from(&self.0)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 带语言标识的文本缓冲区
#[derive(Debug, Clone)]
pub struct Document {
    pub id: DocumentId,
    pub language_id: String,
    pub text: String,
}

impl Document {
    pub fn new(id: DocumentId, language_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            language_id: language_id.into(),
            text: text.into(),
        }
    }
}
