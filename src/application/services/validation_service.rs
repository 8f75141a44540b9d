//! 校验应用服务

use crate::application::diagnostics::DiagnosticStore;
use crate::core::{DotenvParser, EnvStore, validate};
use crate::domain::error::Result;
use crate::domain::models::{DeclaredVarSet, Document, DocumentId, EnvFile, SourceLanguage};
use crate::domain::repositories::WorkspaceRepository;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 一次校验的统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassSummary {
    pub env_files: usize,
    pub declared: usize,
    pub documents: usize,
    pub diagnostics: usize,
}

/// 单个 .env 文件的声明情况，`names` 为 None 表示文件不可读
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvFileReport {
    pub file: EnvFile,
    pub names: Option<Vec<String>>,
}

/// 校验服务
///
/// 扫描路径上的读取失败一律在这里吸收，最坏结果是“什么都没发现”。
pub struct ValidationService {
    repository: Arc<dyn WorkspaceRepository>,
}

impl ValidationService {
    pub fn new(repository: Arc<dyn WorkspaceRepository>) -> Self {
        Self { repository }
    }

    /// 查找 .env 文件，失败时视为没有文件
    pub async fn env_files(&self) -> Vec<EnvFile> {
        match self.repository.find_env_files().await {
            Ok(files) => files,
            Err(e) => {
                warn!(error = %e, "查找 .env 文件失败");
                Vec::new()
            }
        }
    }

    /// 读取全部 .env 文件并构建已声明集合
    pub async fn declared_vars(&self) -> (Vec<EnvFile>, DeclaredVarSet) {
        let files = self.env_files().await;
        let mut contents = Vec::with_capacity(files.len());
        let mut unreadable = 0;

        for file in &files {
            match self.repository.read_file(file.path()).await {
                Ok(content) => contents.push(content),
                Err(e) => {
                    debug!(path = %file.path().display(), error = %e, "跳过无法读取的 .env 文件");
                    unreadable += 1;
                }
            }
        }

        if unreadable > 0 {
            warn!(unreadable, total = files.len(), "部分 .env 文件无法读取");
        }

        let declared = EnvStore::load(contents.iter().map(String::as_str));
        (files, declared)
    }

    /// 逐个文件列出声明的变量名
    pub async fn inspect_env_files(&self) -> Vec<EnvFileReport> {
        let mut reports = Vec::new();
        for file in self.env_files().await {
            let names = match self.repository.read_file(file.path()).await {
                Ok(content) => Some(DotenvParser::keys(&content).collect()),
                Err(e) => {
                    debug!(path = %file.path().display(), error = %e, "跳过无法读取的 .env 文件");
                    None
                }
            };
            reports.push(EnvFileReport { file, names });
        }
        reports
    }

    /// 校验工作区中所有受支持的文档
    pub async fn validate_workspace(&self, store: &mut DiagnosticStore) -> PassSummary {
        let documents = match self.repository.find_documents().await {
            Ok(documents) => documents,
            Err(e) => {
                warn!(error = %e, "查找源码文档失败");
                Vec::new()
            }
        };
        self.validate_documents(documents, store).await
    }

    /// 校验给定文档：先清空存储，再逐个文档发布
    pub async fn validate_documents(
        &self,
        documents: Vec<Document>,
        store: &mut DiagnosticStore,
    ) -> PassSummary {
        let (files, declared) = self.declared_vars().await;

        store.clear();
        let mut summary = PassSummary {
            env_files: files.len(),
            declared: declared.len(),
            documents: documents.len(),
            diagnostics: 0,
        };

        for document in documents {
            let diagnostics = validate(&document, &declared);
            summary.diagnostics += diagnostics.len();
            store.publish(document.id, diagnostics);
        }

        info!(
            env_files = summary.env_files,
            declared = summary.declared,
            documents = summary.documents,
            diagnostics = summary.diagnostics,
            "校验完成"
        );
        summary
    }

    /// 读取单个文件作为文档，语言不受支持或读取失败时返回 None
    pub async fn load_document(&self, path: &Path) -> Result<Option<Document>> {
        let Some(language_id) = SourceLanguage::language_id_for_path(path) else {
            debug!(path = %path.display(), "不支持的文件类型，忽略");
            return Ok(None);
        };
        let text = self.repository.read_file(path).await?;
        Ok(Some(Document::new(DocumentId::from_path(path), language_id, text)))
    }
}
