//! 诊断结果的发布存储
//!
//! 每次校验先 `clear` 再按文档 `publish`，同一文档的新旧诊断不会同时可见。

use crate::domain::models::{Diagnostic, DocumentId};
use std::collections::BTreeMap;

/// 已发布诊断的显式存储，由宿主持有并按引用传给渲染端
#[derive(Debug, Default)]
pub struct DiagnosticStore {
    by_document: BTreeMap<DocumentId, Vec<Diagnostic>>,
}

impl DiagnosticStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 清空全部已发布诊断
    pub fn clear(&mut self) {
        self.by_document.clear();
    }

    /// 整体替换某个文档的诊断
    pub fn publish(&mut self, document: DocumentId, diagnostics: Vec<Diagnostic>) {
        self.by_document.insert(document, diagnostics);
    }

    pub fn get(&self, document: &DocumentId) -> Option<&[Diagnostic]> {
        self.by_document.get(document).map(Vec::as_slice)
    }

    /// 按文档标识排序遍历
    pub fn iter(&self) -> impl Iterator<Item = (&DocumentId, &[Diagnostic])> {
        self.by_document.iter().map(|(id, d)| (id, d.as_slice()))
    }

    /// 已发布的诊断总数
    #[must_use]
    pub fn total(&self) -> usize {
        self.by_document.values().map(Vec::len).sum()
    }
}
