//! 工作区访问接口（输出端口）

use crate::domain::error::Result;
use crate::domain::models::{Document, EnvFile};
use async_trait::async_trait;
use std::path::Path;

/// 工作区访问接口
///
/// 所有 I/O 都经过这里，核心逻辑本身不碰文件系统。
#[async_trait]
pub trait WorkspaceRepository: Send + Sync {
    /// 查找工作区中所有 .env* 文件，按路径排序
    async fn find_env_files(&self) -> Result<Vec<EnvFile>>;

    /// 查找工作区中所有受支持语言的源码文档
    async fn find_documents(&self) -> Result<Vec<Document>>;

    /// 读取文件全文
    async fn read_file(&self, path: &Path) -> Result<String>;

    /// 在已有文件末尾追加文本，文件本身（权限、符号链接）保持不变
    async fn append_file(&self, path: &Path, text: &str) -> Result<()>;
}

/// 多个候选 .env 文件时由宿主提供的选择器
#[async_trait]
pub trait EnvFileSelector: Send + Sync {
    /// 返回选中的文件，None 表示用户取消
    async fn select(&self, candidates: &[EnvFile]) -> Result<Option<EnvFile>>;
}
